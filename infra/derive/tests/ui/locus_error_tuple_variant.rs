use locus_derive::locus_error;

#[locus_error]
pub enum SampleError {
    Io(std::io::Error),
}

fn main() {}
