use std::io::{self, Write};

/// Prints the arguments (program name excluded), one per indented line.
///
/// Prints nothing when there are none. Arguments are not interpreted.
pub fn echo_args<W: Write>(args: &[String], out: &mut W) -> io::Result<()> {
    if args.is_empty() {
        return Ok(());
    }

    writeln!(out, "{} arguments passed:", args.len())?;
    for arg in args {
        writeln!(out, "  {arg}")?;
    }
    Ok(())
}
