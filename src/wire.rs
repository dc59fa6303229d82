mod endianness;
mod request_ptr;
mod wire_error;
mod wire_reader;
mod wire_writer;

pub use endianness::Endianness;
pub use request_ptr::RequestPtr;
pub use wire_error::WireError;
pub use wire_reader::WireReader;
pub use wire_writer::WireWriter;
