pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod events;
pub mod formation;
pub mod projectiles;
pub mod shield;
