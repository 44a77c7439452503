use super::{
    building_shop::BuildingShop, header::Header, holdings_panel::HoldingsPanel,
    roster_panel::RosterPanel,
};
use crate::config::GameConfig;
use crate::model::{BuildingTemplate, GameAction, GameState};
use crate::state::Ticker;
use crate::util::clog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| GameConfig::from_document());
    let game = {
        let config = config.clone();
        use_reducer(move || GameState::with_config(&config))
    };
    let selected = use_state(|| 1_u32);

    // Income ticker: started once on mount, cleared on unmount
    {
        let game = game.clone();
        let period = config.tick_interval_ms;
        use_effect_with((), move |_| {
            let ticker = match Ticker::start(period, move || game.dispatch(GameAction::Tick)) {
                Ok(t) => Some(t),
                Err(err) => {
                    clog(&format!("Failed to start income ticker: {:?}", err));
                    None
                }
            };
            move || {
                if let Some(t) = ticker {
                    t.stop();
                }
            }
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |id: u32| selected.set(id))
    };
    let on_join = {
        let game = game.clone();
        Callback::from(move |player_id: u32| game.dispatch(GameAction::Join { player_id }))
    };
    let on_build = {
        let game = game.clone();
        let player_id = *selected;
        Callback::from(move |template: &'static BuildingTemplate| {
            game.dispatch(GameAction::Build {
                player_id,
                template,
            })
        })
    };

    let current = game.player(*selected).cloned();

    html! {<div style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:sans-serif;">
        <div style="max-width:1280px; margin:0 auto; padding:24px;">
            <Header elapsed_ticks={game.elapsed_ticks} active_players={game.active_count()} />
            <RosterPanel players={game.players.clone()} selected={*selected} on_select={on_select} on_join={on_join} />
            { if let Some(p) = current {
                html!{ <>
                    <BuildingShop player={p.clone()} on_build={on_build} />
                    <HoldingsPanel buildings={p.buildings} />
                </> }
            } else { html!{} } }
        </div>
    </div>}
}
