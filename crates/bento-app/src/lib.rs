// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod ids;
pub mod layout;
pub mod links;
pub mod model;
pub mod state;
pub mod widgets;

pub use ids::*;
pub use layout::*;
pub use links::*;
pub use model::*;
pub use state::*;
pub use widgets::*;
