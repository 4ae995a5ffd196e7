use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use gen_blog::build::build_site;
use gen_blog::config::Settings;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::Path;

fn main() {
    let matches = App::new("gen-blog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Static blog generator - Turn your Markdown files in to HTML files")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("generate")
                .about("Render the Markdown posts in the input folder into HTML pages")
                .arg(
                    Arg::with_name("input")
                        .short("i")
                        .long("input")
                        .takes_value(true)
                        .help("the path of the input folder containing the markdown files."),
                )
                .arg(
                    Arg::with_name("output")
                        .short("o")
                        .long("output")
                        .takes_value(true)
                        .help("the path of the output folder where the static HTML content will be created."),
                )
                .arg(
                    Arg::with_name("title")
                        .short("t")
                        .long("title")
                        .takes_value(true)
                        .help("the title of the blog."),
                )
                .arg(
                    Arg::with_name("posts-per-page")
                        .short("p")
                        .long("posts-per-page")
                        .alias("ppp")
                        .takes_value(true)
                        .help("how many posts per page there should be (0 puts every post on one page)."),
                )
                .arg(
                    Arg::with_name("config")
                        .short("c")
                        .long("config")
                        .takes_value(true)
                        .help("a YAML project file providing any of the settings above."),
                )
                .arg(
                    Arg::with_name("verbose")
                        .short("v")
                        .long("verbose")
                        .help("log every page as it is written."),
                ),
        )
        .get_matches();

    if let ("generate", Some(matches)) = matches.subcommand() {
        let level = match matches.is_present("verbose") {
            true => LevelFilter::Debug,
            false => LevelFilter::Info,
        };
        if let Err(e) = SimpleLogger::new().with_level(level).init() {
            eprintln!("Initializing logger: {}", e);
        }

        if let Err(e) = generate(matches) {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

fn generate(matches: &ArgMatches) -> Result<()> {
    let cli = Settings {
        input: matches.value_of("input").map(Into::into),
        output: matches.value_of("output").map(Into::into),
        title: matches.value_of("title").map(String::from),
        posts_per_page: matches
            .value_of("posts-per-page")
            .map(|value| {
                value.parse::<usize>().with_context(|| {
                    format!("Invalid --posts-per-page value `{}`", value)
                })
            })
            .transpose()?,
    };

    let settings = match matches.value_of("config") {
        Some(path) => cli.or(Settings::from_project_file(Path::new(path))?),
        None => cli,
    };

    build_site(&settings.into_config()?)?;
    Ok(())
}
