use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Concatenate the files listed in a JSON project into one text file for LLMs"
)]
pub struct Cli {
    /// Name of the JSON file in the projects directory (e.g., my-project.json)
    pub project: String,
}
