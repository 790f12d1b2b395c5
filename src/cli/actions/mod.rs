pub mod demo;

/// Actions that the CLI can perform
#[derive(Debug)]
pub enum Action {
    Demo(demo::Args),
}
