pub mod types;
pub mod env;

pub mod utils {
    pub mod logging;
}
