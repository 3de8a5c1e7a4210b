use yew::prelude::*;
use shared::{DelayRange, RouteId, RouteTally, VoteStatus};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub route: RouteId,
    pub tally: RouteTally,
    pub status: VoteStatus,
    /// Some vote, on any route, is still being sent.
    pub locked: bool,
    pub on_vote: Callback<DelayRange>,
}

#[function_component(RouteCard)]
pub fn route_card(props: &Props) -> Html {
    html! {
        <div class={CARD}>
            <div class={CARD_HEADER}>
                <h2 class={HEADING_SM}>{props.route.label()}</h2>
            </div>

            <div class={CARD_BODY}>
                <div class={SPACE_Y_BASE}>
                    {for DelayRange::ALL.iter().map(|&range| render_bar(&props.tally, range))}
                </div>

                <div class="pt-4 border-t border-gray-100">
                    {render_controls(props)}
                </div>
            </div>
        </div>
    }
}

fn render_bar(tally: &RouteTally, range: DelayRange) -> Html {
    html! {
        <div>
            <div class={combine_classes(FLEX_BETWEEN, "text-sm text-gray-600 mb-1")}>
                <span>{range.label()}</span>
                <span>{format!("{}%", tally.rounded_share(range))}</span>
            </div>
            <div class={BAR_TRACK}>
                <div class={BAR_FILL} style={format!("width: {}%", tally.share(range))} />
            </div>
        </div>
    }
}

fn render_controls(props: &Props) -> Html {
    if props.status == VoteStatus::Voted {
        return html! {
            <p class={TEXT_SUCCESS}>{"✅ Obrigado! Seu voto foi registrado."}</p>
        };
    }

    let voting = props.status == VoteStatus::Voting;
    html! {
        <div class="space-y-2 transition-opacity duration-300 opacity-100">
            {for DelayRange::ALL.iter().map(|&range| {
                let onclick = {
                    let on_vote = props.on_vote.clone();
                    Callback::from(move |_: MouseEvent| on_vote.emit(range))
                };
                html! {
                    <button class={BUTTON_VOTE} {onclick} disabled={props.locked}>
                        {if voting { "Carregando..." } else { range.label() }}
                    </button>
                }
            })}
        </div>
    }
}
