use crate::model::ROSTER_SIZE;
use crate::util::format_clock;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HeaderProps {
    pub elapsed_ticks: u64,
    pub active_players: usize,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {<div style="text-align:center; margin-bottom:28px;">
        <h1 style="margin:0 0 8px 0; font-size:48px; letter-spacing:4px; color:#f0f6fc;">{"MULTIPLAYER TYCOON"}</h1>
        <div style="font-size:16px; opacity:0.8;">{"Build your industrial empire"}</div>
        <div style="margin-top:12px; display:flex; justify-content:center; align-items:center; gap:20px;">
            <div style="display:flex; align-items:center; gap:6px; color:#2dd4bf;">
                <span>{"⏱"}</span>
                <span style="font-family:monospace; font-size:18px;">{ format_clock(props.elapsed_ticks) }</span>
            </div>
            <div style="display:flex; align-items:center; gap:6px; color:#facc15;">
                <span>{"👥"}</span>
                <span>{ format!("{}/{} players", props.active_players, ROSTER_SIZE) }</span>
            </div>
        </div>
    </div>}
}
