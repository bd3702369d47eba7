#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchTarget {
    QemuAarch64,
    QemuRiscv64,
    Spike,
    Bpif3,
    Raspi4,
}

impl BenchTarget {
    /* Dataset order of the chart, also the column order of the csv file */
    pub const ALL: [BenchTarget; 5] = [
        BenchTarget::QemuAarch64,
        BenchTarget::QemuRiscv64,
        BenchTarget::Spike,
        BenchTarget::Bpif3,
        BenchTarget::Raspi4,
    ];

    #[doc = "Legend label of the target's dataset"]
    pub fn label(&self) -> &'static str {
        match self {
            BenchTarget::QemuAarch64 => "QEMU AARCH64",
            BenchTarget::QemuRiscv64 => "QEMU RISCV64",
            BenchTarget::Spike => "SPIKE",
            BenchTarget::Bpif3 => "BPIF3",
            BenchTarget::Raspi4 => "RASPI4",
        }
    }

    #[doc = "Header name of the target's column in the combined results csv"]
    pub fn column_name(&self) -> &'static str {
        match self {
            BenchTarget::QemuAarch64 => "qemu_aarch64_us",
            BenchTarget::QemuRiscv64 => "qemu_riscv64_us",
            BenchTarget::Spike => "spike_us",
            BenchTarget::Bpif3 => "bpif3_us",
            BenchTarget::Raspi4 => "raspi4_us",
        }
    }

    #[doc = "Bar colour of the target's dataset"]
    pub fn bar_color(&self) -> &'static str {
        match self {
            BenchTarget::QemuAarch64 => "rgba(255, 69, 0, 0.85)",
            BenchTarget::QemuRiscv64 => "rgba(0, 0, 205, 0.85)",
            BenchTarget::Spike => "rgba(34, 139, 34, 0.85)",
            BenchTarget::Bpif3 => "rgba(255, 215, 0, 0.85)",
            BenchTarget::Raspi4 => "rgba(128, 0, 128, 0.85)",
        }
    }

    /* Position of the target inside a row, the test name sits at 0 */
    pub fn index(&self) -> usize {
        match self {
            BenchTarget::QemuAarch64 => 0,
            BenchTarget::QemuRiscv64 => 1,
            BenchTarget::Spike => 2,
            BenchTarget::Bpif3 => 3,
            BenchTarget::Raspi4 => 4,
        }
    }
}
