pub mod app;
pub mod building_shop;
pub mod header;
pub mod holdings_panel;
pub mod player_card;
pub mod roster_panel;
