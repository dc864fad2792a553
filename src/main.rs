//! tintline - print a file to the terminal with syntax highlighting
//!
//! A thin driver over the engine: resolve the file's language, highlight
//! every line through the scheduler, resolve spans against the selected
//! theme, and write styled text with crossterm.

use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use crossterm::{
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use tintline::{style_for, Color, HighlightMap, LanguageRegistry, Style, Theme};

struct Options {
    file: PathBuf,
    theme: Theme,
    language: Option<String>,
    profiles: Option<PathBuf>,
    plain: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args[1..]) {
        Ok(Some(options)) => options,
        Ok(None) => return Ok(()),
        Err(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Try `tintline --help`");
            process::exit(2);
        }
    };

    let mut registry = LanguageRegistry::new();
    if let Some(path) = &options.profiles {
        if let Err(e) = registry.load_custom(path) {
            eprintln!("Error: cannot load profiles from {}: {}", path.display(), e);
            process::exit(1);
        }
    }

    let profile = match &options.language {
        Some(name) => match registry.get(name) {
            Some(profile) => profile,
            None => {
                eprintln!("Error: unknown language `{name}`");
                eprintln!("Known languages: {}", registry.names().join(", "));
                process::exit(2);
            }
        },
        None => registry.resolve_path(&options.file),
    };

    let contents = std::fs::read_to_string(&options.file)?;
    let lines: Vec<&str> = contents.lines().collect();

    let mut map = HighlightMap::new();
    map.highlight_all(&lines, profile);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (index, line) in lines.iter().enumerate() {
        if options.plain {
            queue!(out, Print(line), Print("\n"))?;
            continue;
        }
        for span in map.spans(index) {
            let style = style_for(span.token, options.theme);
            write_styled(&mut out, &line[span.start..span.end], style)?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Write one span with its resolved attributes, then reset
fn write_styled(out: &mut impl Write, text: &str, style: Style) -> io::Result<()> {
    if style.is_default() {
        return queue!(out, Print(text));
    }
    if style.fg != Color::Default {
        queue!(out, SetForegroundColor(terminal_color(style.fg)))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    queue!(out, Print(text), SetAttribute(Attribute::Reset), ResetColor)
}

/// Map engine colors onto crossterm's palette
fn terminal_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as Term;
    match color {
        Color::Default => Term::Reset,
        Color::Black => Term::Black,
        Color::Red => Term::DarkRed,
        Color::Green => Term::DarkGreen,
        Color::Yellow => Term::DarkYellow,
        Color::Blue => Term::DarkBlue,
        Color::Magenta => Term::DarkMagenta,
        Color::Cyan => Term::DarkCyan,
        Color::White => Term::Grey,
        Color::BrightBlack => Term::DarkGrey,
        Color::BrightRed => Term::Red,
        Color::BrightGreen => Term::Green,
        Color::BrightYellow => Term::Yellow,
        Color::BrightBlue => Term::Blue,
        Color::BrightMagenta => Term::Magenta,
        Color::BrightCyan => Term::Cyan,
        Color::BrightWhite => Term::White,
    }
}

fn parse_args(args: &[String]) -> std::result::Result<Option<Options>, String> {
    let mut file = None;
    let mut theme = Theme::Dark;
    let mut language = None;
    let mut profiles = None;
    let mut plain = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--list-languages" => {
                for name in LanguageRegistry::new().names() {
                    println!("{name}");
                }
                return Ok(None);
            }
            "--theme" | "-t" => {
                let value = iter.next().ok_or("--theme needs a value")?;
                theme = Theme::from_name(value)
                    .ok_or_else(|| format!("unknown theme `{value}` (light or dark)"))?;
            }
            "--lang" | "-l" => {
                language = Some(iter.next().ok_or("--lang needs a value")?.clone());
            }
            "--profiles" | "-p" => {
                profiles = Some(PathBuf::from(
                    iter.next().ok_or("--profiles needs a value")?,
                ));
            }
            "--plain" => plain = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option `{other}`"));
            }
            other => {
                if file.replace(PathBuf::from(other)).is_some() {
                    return Err("more than one file given".into());
                }
            }
        }
    }

    if env::var_os("NO_COLOR").is_some() {
        plain = true;
    }

    match file {
        Some(file) => Ok(Some(Options {
            file,
            theme,
            language,
            profiles,
            plain,
        })),
        None => Err("no file given".into()),
    }
}

fn print_usage() {
    println!("tintline {} - syntax highlighting to your terminal", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: tintline [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -t, --theme <light|dark>  Color theme (default dark)");
    println!("  -l, --lang <name>         Force a language instead of detecting by extension");
    println!("  -p, --profiles <file>     Load custom language profiles from a TOML file");
    println!("      --plain               No colors, just the text");
    println!("      --list-languages      Print known language names and exit");
    println!("  -h, --help                Show this help message");
    println!("  -V, --version             Show version information");
}

fn print_version() {
    println!("tintline {}", env!("CARGO_PKG_VERSION"));
}
