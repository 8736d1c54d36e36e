use uuid::Uuid;

/// Produces the opaque identifiers stamped on result records.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
