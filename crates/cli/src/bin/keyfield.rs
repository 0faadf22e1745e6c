use anyhow::Result;

fn main() -> Result<()> {
    keyfield_cli::main_entry()
}
