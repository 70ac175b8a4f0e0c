use std::io::Write;

pub trait Generator {
    fn output(&self, writer: &mut dyn Write) -> std::io::Result<()>;
}
