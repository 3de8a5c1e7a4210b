use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::{callback::Interval, future::TimeoutFuture};
use wasm_bindgen_futures::spawn_local;
use web_sys::console;
use shared::{DelayRange, RouteId, Slot, Tally, VoteRequest, VotingSession};
use crate::{api, clock, config::CONFIG, route_card::RouteCard, styles::*};

#[derive(Clone, PartialEq)]
pub struct MonitorState {
    slot: Option<Slot>,
    tally: Tally,
    loading: bool,
    /// Render copy of the session cell owned by [`Monitor`].
    session: VotingSession,
}

impl Default for MonitorState {
    fn default() -> Self {
        let slot = clock::slot_now();
        Self {
            slot,
            tally: Tally::default(),
            loading: slot.is_some(),
            session: VotingSession::new(),
        }
    }
}

pub enum Msg {
    ClockTick(Option<Slot>),
    FetchStarted,
    TallyReceived(Tally),
    SessionChanged(VotingSession),
}

impl Reducible for MonitorState {
    type Action = Msg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            Msg::ClockTick(slot) => {
                next.slot = slot;
            },
            Msg::FetchStarted => {
                next.loading = true;
            },
            Msg::TallyReceived(tally) => {
                next.tally = tally;
                next.loading = false;
            },
            Msg::SessionChanged(session) => {
                next.session = session;
            },
        }
        Rc::new(next)
    }
}

fn publish(state: &UseReducerHandle<MonitorState>, session: &Rc<RefCell<VotingSession>>) {
    state.dispatch(Msg::SessionChanged(session.borrow().clone()));
}

/// Loads the tally for `slot`. A failed load leaves the previous state in
/// place.
fn refresh(state: UseReducerHandle<MonitorState>, slot: Slot) {
    state.dispatch(Msg::FetchStarted);
    spawn_local(async move {
        match api::fetch_tally(slot).await {
            Ok(tally) => state.dispatch(Msg::TallyReceived(tally)),
            Err(e) => console::warn_1(&format!("Failed to load votes for {}: {}", slot, e).into()),
        }
    });
}

#[function_component]
pub fn Monitor() -> Html {
    let state = use_reducer(MonitorState::default);
    let session = use_mut_ref(VotingSession::new);

    use_effect_with_deps({
        let state = state.clone();
        move |_| {
            if let Some(slot) = state.slot {
                refresh(state.clone(), slot);
            }

            let timer_state = state.clone();
            let interval = Interval::new(CONFIG.refresh_interval_ms, move || {
                let slot = clock::slot_now();
                timer_state.dispatch(Msg::ClockTick(slot));
                if let Some(slot) = slot {
                    refresh(timer_state.clone(), slot);
                }
            });

            move || drop(interval)
        }
    }, ());

    let on_vote = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |(route, faixa): (RouteId, DelayRange)| {
            let Some(slot) = state.slot else { return };
            // The cell outlives renders, so a stale callback still sees the lock.
            if session.borrow_mut().begin(route).is_err() {
                return;
            }
            publish(&state, &session);

            let state = state.clone();
            let session = session.clone();
            spawn_local(async move {
                let request = VoteRequest {
                    rota_id: route,
                    faixa,
                    horario_previsto: slot.label(),
                };
                if let Err(e) = api::submit_vote(&request).await {
                    console::warn_1(&format!("Failed to send vote for {}: {}", route, e).into());
                }

                TimeoutFuture::new(CONFIG.vote_settle_ms).await;
                session.borrow_mut().finish(route);
                publish(&state, &session);
                refresh(state, slot);
            });
        })
    };

    html! {
        <main class={PAGE}>
            <section class={SECTION}>
                <h1 class={HEADING_LG}>{"🚃 Monitor de Atrasos - VLT Fortaleza"}</h1>

                {match state.slot {
                    None => html! {
                        <p class={TEXT_ALERT}>
                            {"Fora do horário de operação do VLT (05:30 até 23:30)."}
                        </p>
                    },
                    Some(slot) => html! {
                        <p class={combine_classes(TEXT_MUTED, "text-center mb-6")}>
                            {"Horário atual considerado: "}<strong>{slot.label()}</strong>
                        </p>
                    },
                }}

                {if state.slot.is_none() {
                    html! {}
                } else if state.loading {
                    render_skeleton()
                } else {
                    html! {
                        <div class="space-y-8">
                            {for RouteId::DISPLAY_ORDER.iter().map(|&route| html! {
                                <RouteCard
                                    key={route.as_str()}
                                    {route}
                                    tally={*state.tally.route(route)}
                                    status={state.session.status(route)}
                                    locked={state.session.is_locked()}
                                    on_vote={on_vote.reform(move |range| (route, range))}
                                />
                            })}
                        </div>
                    }
                }}

                {render_community()}
            </section>
        </main>
    }
}

fn render_skeleton() -> Html {
    html! {
        <div class="space-y-6">
            {for (0..RouteId::DISPLAY_ORDER.len()).map(|_| html! {
                <div class={CARD_SKELETON}>
                    <div class="h-5 w-1/3 bg-gray-300 rounded" />
                    <div class={SPACE_Y_BASE}>
                        {for (0..4).map(|_| html! {
                            <div>
                                <div class={combine_classes(FLEX_BETWEEN, "mb-1")}>
                                    <div class="h-3 w-1/2 bg-gray-200 rounded" />
                                    <div class="h-3 w-6 bg-gray-200 rounded" />
                                </div>
                                <div class={BAR_TRACK} />
                            </div>
                        })}
                    </div>
                    <div class="space-y-2 mt-4">
                        {for (0..4).map(|_| html! { <div class="h-9 bg-gray-300 rounded w-full" /> })}
                    </div>
                </div>
            })}
        </div>
    }
}

fn render_community() -> Html {
    html! {
        <div class="mt-14 text-center border-t pt-10 border-gray-300">
            <h2 class="text-lg font-semibold mb-2">{"🌐 Junte-se à Comunidade"}</h2>
            <p class={combine_classes(TEXT_MUTED, "mb-4")}>
                {"Receba atualizações, compartilhe informações e ajude a monitorar o VLT em tempo real com outros usuários."}
            </p>
            <a href={CONFIG.community_url} target="_blank" rel="noopener noreferrer" class={BUTTON_LINK}>
                {"Entrar no Grupo do WhatsApp"}
            </a>
        </div>
    }
}
