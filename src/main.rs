fn main() -> anyhow::Result<()> {
    let command_line_interface = json_schema_md::cli::CommandLineInterface::load();
    command_line_interface.run()
}
