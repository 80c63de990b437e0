pub mod cpu;
pub mod disk;
pub mod format;
pub mod memory;
pub mod network;
pub mod temperature;

pub use cpu::CpuWidget;
pub use disk::DiskWidget;
pub use format::{bytes2human, format_percent};
pub use memory::MemoryWidget;
pub use network::NetworkWidget;
pub use temperature::TempWidget;

use oledstat_core::StatWidget;

/// Rows drawn by [`default_widgets`]; the layout needs at least this many slots.
pub const ROW_COUNT: usize = 5;

/// The five rows in display order: Temp, CPU, Mem, Disk, Network.
pub fn default_widgets() -> Vec<Box<dyn StatWidget>> {
    vec![
        Box::new(TempWidget::new()),
        Box::new(CpuWidget::new()),
        Box::new(MemoryWidget::new()),
        Box::new(DiskWidget::new()),
        Box::new(NetworkWidget::new()),
    ]
}
