use crate::model::{BuildingTemplate, Player, BUILDING_CATALOG};
use crate::util::format_money;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BuildingShopProps {
    pub player: Player,
    pub on_build: Callback<&'static BuildingTemplate>,
}

fn stat_row(label: &'static str, value: String, color: &'static str) -> Html {
    html! {<div style="display:flex; justify-content:space-between; font-size:13px;">
        <span style="color:#8b949e;">{ label }</span>
        <span style={format!("color:{}; font-variant-numeric:tabular-nums;", color)}>{ value }</span>
    </div>}
}

#[function_component]
pub fn BuildingShop(props: &BuildingShopProps) -> Html {
    let player = &props.player;
    let cards = BUILDING_CATALOG.iter().map(|template| {
        let owned = player.owned(template.id);
        let cost = player.required_cost(template);
        let can_afford = player.can_afford(template);
        let build_cb = {
            let cb = props.on_build.clone();
            Callback::from(move |_| cb.emit(template))
        };
        let button_style = if can_afford {
            "width:100%; padding:6px 0; background:#f97316; border:none; border-radius:6px; color:#fff; cursor:pointer;"
        } else {
            "width:100%; padding:6px 0; background:#4b5563; border:none; border-radius:6px; color:#9ca3af; cursor:not-allowed;"
        };
        html! {
            <div key={template.id.to_string()} style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; padding:14px; display:flex; flex-direction:column; gap:10px;">
                <div style="text-align:center;">
                    <div style="font-size:36px;">{ template.icon }</div>
                    <div style="font-weight:600; font-size:16px;">{ template.name }</div>
                    <div style="font-size:11px; opacity:0.6;">{ template.kind.label() }</div>
                    { if let Some(b) = owned {
                        html!{ <span style="display:inline-block; margin-top:6px; padding:2px 8px; background:#2dd4bf; color:#000; border-radius:10px; font-size:12px;">{ format!("Level {}", b.level) }</span> }
                    } else { html!{} } }
                </div>
                { stat_row("Production:", format!("{}/min", template.production), "#22c55e") }
                { stat_row("Income:", format!("{}/tick", format_money(template.income)), "#facc15") }
                { stat_row("Cost:", format_money(cost), "#f0f6fc") }
                <button onclick={build_cb} disabled={!can_afford} style={button_style}>
                    { if owned.is_some() { "Upgrade" } else { "Build" } }
                </button>
            </div>
        }
    });
    html! {<div style="margin-bottom:28px;">
        <h2 style="margin:0 0 16px 0; font-size:26px; color:#f0f6fc;">{"Production Buildings"}</h2>
        <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(200px, 1fr)); gap:16px;">
            { for cards }
        </div>
    </div>}
}
