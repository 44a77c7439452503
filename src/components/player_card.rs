use crate::model::Player;
use crate::util::format_money;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerCardProps {
    pub player: Player,
    pub selected: bool,
    pub on_select: Callback<u32>,
    pub on_join: Callback<u32>,
}

#[function_component]
pub fn PlayerCard(props: &PlayerCardProps) -> Html {
    let p = &props.player;
    let color = p.color.css();
    let select_cb = {
        let cb = props.on_select.clone();
        let id = p.id;
        Callback::from(move |_| cb.emit(id))
    };
    // the card itself selects, so the join click must not bubble
    let join_cb = {
        let cb = props.on_join.clone();
        let id = p.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id)
        })
    };
    let card_style = format!(
        "cursor:pointer; background:{}; border:{}; border-radius:8px; padding:10px 14px; display:flex; flex-direction:column; gap:8px; opacity:{};",
        if props.selected { "#161b22" } else { "rgba(22,27,34,0.6)" },
        if props.selected { format!("2px solid {}", color) } else { "1px solid #30363d".to_string() },
        if p.active { "1" } else { "0.6" },
    );
    html! {
        <div style={card_style} onclick={select_cb}>
            <div style="display:flex; align-items:center; justify-content:space-between; gap:8px;">
                <span style={format!("color:{}; font-weight:600; font-size:14px;", color)}>{ p.name.clone() }</span>
                { if !p.active {
                    html!{ <button onclick={join_cb} style="padding:2px 10px; font-size:12px; background:#f97316; border:none; border-radius:4px; color:#fff;">{"Play"}</button> }
                } else { html!{} } }
            </div>
            <div style="display:flex; align-items:center; gap:6px; color:#facc15; font-variant-numeric:tabular-nums;">
                <span>{"💰"}</span>
                <span style="font-family:monospace;">{ format_money(p.money) }</span>
            </div>
            <div style="display:flex; align-items:center; gap:6px; color:#22c55e; font-size:13px;">
                <span>{"🏢"}</span>
                <span>{ format!("{} buildings", p.buildings.len()) }</span>
            </div>
            <div style="font-size:11px; color:#8b949e;">{ format!("Income: {}/tick", format_money(p.income_per_tick())) }</div>
        </div>
    }
}
