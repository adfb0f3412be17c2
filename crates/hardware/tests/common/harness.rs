use rvemu_core::Cpu;
use rvemu_core::common::Result;
use rvemu_core::config::Config;
use rvemu_core::core::arch::HartState;

use super::builder::instruction::to_image;

/// Small memory used by most tests.
pub const TEST_RAM_SIZE: usize = 64 * 1024;

#[derive(Debug)]
pub struct TestContext {
    pub cpu: Cpu,
    pub config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.memory.ram_size = TEST_RAM_SIZE;
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("rvemu_core=trace")
            .try_init();

        let cpu = Cpu::with_config(&config);
        Self { cpu, config }
    }

    /// Base address of DRAM.
    pub fn base(&self) -> u64 {
        self.config.memory.ram_base
    }

    /// Load a sequence of 32-bit instructions into memory at `addr` and set the PC.
    pub fn load_program(mut self, addr: u64, instructions: &[u32]) -> Self {
        let image = to_image(instructions);
        if let Err(e) = self.cpu.bus.load_binary_at(&image, addr) {
            panic!("test program does not fit: {e}");
        }
        self.cpu.pc = addr;
        self
    }

    /// Load a program at the DRAM base.
    pub fn with_program(self, instructions: &[u32]) -> Self {
        let base = self.base();
        self.load_program(base, instructions)
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: u64) {
        self.cpu.regs.write(reg, val);
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> u64 {
        self.cpu.regs.read(reg)
    }

    /// Execute one instruction.
    pub fn step(&mut self) -> Result<HartState> {
        self.cpu.step()
    }

    /// Run the CPU for a specific number of steps, stopping at the first error.
    pub fn run(&mut self, steps: u64) -> Result<()> {
        for _ in 0..steps {
            if self.cpu.step()?.is_halted() {
                break;
            }
        }
        Ok(())
    }
}
