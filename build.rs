// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

fn names_arg() -> Arg {
    Arg::new("names")
        .required(true)
        .num_args(1..)
        .value_name("NAME")
        .help("Package names")
}

fn build_cli() -> Command {
    Command::new("repo")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Repo Contributors")
        .about("Manage local pacman repositories")
        .subcommand_required(false)
        .arg(
            Arg::new("soft")
                .short('s')
                .long("soft")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Don't delete any files, only update the database"),
        )
        .arg(
            Arg::new("noconfirm")
                .short('y')
                .long("noconfirm")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Don't ask before deleting files, just do it"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .value_name("PATH")
                .help("Alternate configuration file (default: ~/.repo.conf)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Tell me more"),
        )
        .subcommand(
            Command::new("add")
                .about("Add the newest file of each package to the database, deleting older files")
                .arg(names_arg()),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove packages from the database and delete their files")
                .arg(names_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Add every package whose files changed since the database was updated"),
        )
        .subcommand(Command::new("list").about("List the packages in the repository directory"))
        .subcommand(
            Command::new("sync").about("Compare packages in the database to upstream (not implemented)"),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "zsh", "fish", "powershell", "elvish"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Create man directory
    let out_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).expect("Failed to create man directory");

    // Generate main man page
    let cmd = build_cli();
    let man = Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("Failed to render man page");

    let man_path = man_dir.join("repo.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");
}
