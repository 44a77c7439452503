use crate::model::OwnedBuilding;
use crate::util::format_money;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HoldingsPanelProps {
    pub buildings: Vec<OwnedBuilding>,
}

#[function_component]
pub fn HoldingsPanel(props: &HoldingsPanelProps) -> Html {
    if props.buildings.is_empty() {
        return html! {};
    }
    html! {<div>
        <h2 style="margin:0 0 16px 0; font-size:26px; color:#f0f6fc;">{"My Enterprises"}</h2>
        <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(260px, 1fr)); gap:16px;">
            { for props.buildings.iter().enumerate().map(|(i, b)| {
                let progress = b.progress_percent().clamp(0.0, 100.0);
                html!{
                    <div key={format!("{}-{}", b.id, i)} style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:10px; padding:14px; display:flex; flex-direction:column; gap:10px;">
                        <div style="display:flex; align-items:center; gap:10px;">
                            <span style="font-size:26px;">{ b.icon.clone() }</span>
                            <div>
                                <div style="font-weight:600;">{ b.name.clone() }</div>
                                <div style="color:#2dd4bf; font-size:13px;">{ format!("Level {}", b.level) }</div>
                            </div>
                        </div>
                        <div style="display:flex; justify-content:space-between; font-size:13px;">
                            <span style="color:#8b949e;">{"Production:"}</span>
                            <span style="color:#22c55e;">{ format!("{}/min", b.output()) }</span>
                        </div>
                        <div style="display:flex; justify-content:space-between; font-size:13px;">
                            <span style="color:#8b949e;">{"Income:"}</span>
                            <span style="color:#facc15;">{ format!("{}/tick", format_money(b.income)) }</span>
                        </div>
                        <div style="height:8px; background:#4b5563; border-radius:4px; overflow:hidden;">
                            <div style={format!("width:{:.0}%; height:100%; background:#2dd4bf;", progress)}></div>
                        </div>
                        <div style="font-size:11px; color:#8b949e; text-align:center;">{ format!("Efficiency: {}%", b.efficiency_percent()) }</div>
                    </div>
                }
            }) }
        </div>
    </div>}
}
