pub mod filter;
pub mod machine;
pub mod view;

pub use filter::{FilterState, OsFilter, StatusFilter, os_options};
pub use machine::{CheckTag, MachineRecord};
pub use view::{CheckLine, MachinesView, StatusCard, render_machines};
