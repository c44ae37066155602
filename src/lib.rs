pub use config::{
    ConfigError,
    MachineConfig,
};
pub use fruit::{
    Fruit,
    Outcome,
};
pub use machine::{
    Frame,
    IconSource,
    MachineState,
    RandomIcons,
    SlotMachine,
    SpinSession,
};
pub use presenter::Presenter;
pub use reel::{
    Column,
    Tier,
};
pub use stats::Statistics;

pub mod config;
pub mod driver;
pub mod fruit;
pub mod machine;
pub mod presenter;
pub mod reel;
pub mod stats;

pub mod test_helpers;
