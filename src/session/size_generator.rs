use rand::Rng;

/// Smallest size handed out for a synthetic file, in bytes
pub const MIN_FILE_SIZE: u64 = 1;
/// Largest size handed out for a synthetic file, in bytes
pub const MAX_FILE_SIZE: u64 = 1024;

/// Source of sizes for files created with `mkfile`
pub trait SizeGenerator {
    fn next_size(&mut self) -> u64;
}

/// Uniform over `MIN_FILE_SIZE..=MAX_FILE_SIZE`, using the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSizeGenerator;

impl SizeGenerator for RandomSizeGenerator {
    fn next_size(&mut self) -> u64 {
        rand::thread_rng().gen_range(MIN_FILE_SIZE..=MAX_FILE_SIZE)
    }
}
