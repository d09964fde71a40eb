//=========================================================================
// Aetheric Stage — Library Root
//
// Level progression and interactable lifecycle for VR stages.
//
// Responsibilities:
// - Expose the stage runtime (`Stage`, `StageBuilder`)
// - Expose the core systems for embedders that wire their own engine
//   components, tasks and prompts behind the provided traits
//
// Typical usage:
// ```no_run
// use aetheric_stage::prelude::*;
//
// let mut stage = StageBuilder::new().build();
// stage.start().expect("player and spawn point must exist");
// while !stage.exit_requested() {
//     stage.tick().expect("stage failed");
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the interaction, level, scene and scheduling systems.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `stage` defines the runtime facade and its builder.
//
mod stage;

//--- Public Exports ------------------------------------------------------

pub use stage::{Stage, StageBuilder};
