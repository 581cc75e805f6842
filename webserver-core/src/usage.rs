use std::fmt;

use tracing::debug;

use crate::label::{Labels, StyledText};

/// Name the tool is invoked by.
pub const PROGRAM: &str = "web-server";

/// Every command the help screen documents.
pub const COMMANDS: [&str; 11] = [
    "version",
    "help",
    "uninstall",
    "local",
    "global",
    "proxy",
    "sync",
    "enable",
    "disable",
    "logs",
    "status",
];

/// Every option the help screen documents.
pub const OPTIONS: [&str; 8] = [
    "port",
    "host",
    "account",
    "folder",
    "proxy",
    "sync",
    "exit-on-sync",
    "sync-folder-and-contents",
];

const INDENT: &str = "    ";
const FURTHER_INFORMATION: &str = "For further information, please see https://ind.ie/web-server";

/// Supplies the version banner shown at the top of the help screen.
pub trait VersionProvider {
    fn version(&self) -> String;
}

impl VersionProvider for &str {
    fn version(&self) -> String {
        self.to_string()
    }
}

impl VersionProvider for String {
    fn version(&self) -> String {
        self.clone()
    }
}

/// Version banner built from this package's manifest.
#[derive(Debug, Default, Clone, Copy)]
pub struct PackageVersion;

impl VersionProvider for PackageVersion {
    fn version(&self) -> String {
        format!("Indie Web Server v{}", env!("CARGO_PKG_VERSION"))
    }
}

/// The complete help screen, ready to be written out once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageDocument(String);

impl UsageDocument {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UsageDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A label and its description, separated by `tabs` tab stops.
fn entry(label: impl fmt::Display, tabs: usize, description: &str) -> String {
    format!("{INDENT}{label}{}{description}", "\t".repeat(tabs))
}

/// Prose line inside a section.
fn note(text: &str) -> String {
    format!("{INDENT}{text}")
}

/// One worked example: description, tab stops, prompt, then the invocation.
fn example(labels: &Labels, description: &str, tabs: usize, args: &[StyledOrText]) -> String {
    let mut invocation = format!("{} {PROGRAM}", labels.prompt());
    for arg in args {
        invocation.push(' ');
        invocation.push_str(arg.as_str());
    }
    format!(
        "{INDENT}• {description}{}{invocation}",
        "\t".repeat(tabs)
    )
}

/// An example argument: either styled or literal text.
enum StyledOrText {
    Styled(StyledText),
    Text(String),
}

impl StyledOrText {
    fn as_str(&self) -> &str {
        match self {
            StyledOrText::Styled(s) => s.as_str(),
            StyledOrText::Text(t) => t,
        }
    }
}

impl From<StyledText> for StyledOrText {
    fn from(value: StyledText) -> Self {
        StyledOrText::Styled(value)
    }
}

impl From<String> for StyledOrText {
    fn from(value: String) -> Self {
        StyledOrText::Text(value)
    }
}

macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        &[$(StyledOrText::from($arg)),*]
    };
}

pub fn version_section(version: &dyn VersionProvider) -> String {
    format!("   {}", version.version())
}

pub fn usage_section(labels: &Labels) -> String {
    let command = labels.command("command");
    let folder_or_host = format!("{}|host", labels.argument("folder"));
    let host = labels.argument("host");
    let options = labels.option("options");

    // uninstall is documented below but left out of the grammar line
    let catalog = COMMANDS
        .iter()
        .filter(|name| **name != "uninstall")
        .map(|name| labels.command(name).to_string())
        .collect::<Vec<String>>()
        .join(" | ");

    [
        note(labels.heading("Usage:").as_str()),
        String::new(),
        format!(
            "{INDENT}{} [{command}] [{folder_or_host}] [{host}] [{options}]",
            labels.program(PROGRAM)
        ),
        String::new(),
        entry(&command, 1, &catalog),
        entry(
            &folder_or_host,
            1,
            "Path of folder to serve (defaults to current folder) or host to proxy or sync.",
        ),
        entry(&host, 1, "Host to sync."),
        entry(&options, 1, "Settings that alter server characteristics."),
    ]
    .join("\n")
}

pub fn commands_section(labels: &Labels) -> String {
    let sync_description = format!(
        "Start server as regular process with locally-trusted certificates and {} {} to {}.",
        labels.emphasised("rsync"),
        labels.argument("folder"),
        labels.argument("host"),
    );
    let default_note = format!(
        "If {} is omitted, behaviour defaults to {}.",
        labels.command("command"),
        labels.command("local"),
    );

    [
        note(labels.heading("Commands:").as_str()),
        String::new(),
        entry(labels.command("version"), 1, "Display version and exit."),
        entry(labels.command("help"), 1, "Display this help screen and exit."),
        entry(labels.command("uninstall"), 1, "Uninstall Indie Web Server."),
        String::new(),
        entry(
            labels.command("local"),
            1,
            "Start server as regular process with locally-trusted certificates.",
        ),
        entry(
            labels.command("global"),
            1,
            "Start server as regular process with globally-trusted certificates.",
        ),
        entry(
            labels.command("proxy"),
            1,
            "Start server to proxy provided HTTP URL via HTTPS. Also proxies WebSockets.",
        ),
        entry(labels.command("sync"), 1, &sync_description),
        String::new(),
        note("On Linux distributions with systemd, you can also use:"),
        String::new(),
        entry(
            labels.command("enable"),
            1,
            "Start server as daemon with globally-trusted certificates and add to startup.",
        ),
        entry(
            labels.command("disable"),
            1,
            "Stop server daemon and remove from startup.",
        ),
        entry(labels.command("logs"), 1, "Display and tail server logs."),
        entry(labels.command("status"), 1, "Display detailed server information."),
        String::new(),
        note(&default_note),
    ]
    .join("\n")
}

pub fn options_section(labels: &Labels) -> String {
    [
        note(labels.heading("Options:").as_str()),
        String::new(),
        entry(
            labels.option("port"),
            1,
            "Port to start server on (defaults to 443).",
        ),
        String::new(),
        note(&format!("For the {} command:", labels.command("enable"))),
        String::new(),
        entry(
            labels.option("sync"),
            1,
            "Ensure the server can also rsync via ssh (so you can sync your site to it from your local machine).",
        ),
        String::new(),
        note(&format!("For the {} command:", labels.command("sync"))),
        String::new(),
        entry(
            labels.option("host"),
            3,
            "The remote host to sync to (e.g., my-demo.site).",
        ),
        entry(
            labels.option("account"),
            3,
            "The ssh account to use on remote server (defaults to same as on current session).",
        ),
        entry(
            labels.option("folder"),
            3,
            "The subfolder of home folder to sync to on remote machine (defaults to name of served folder).",
        ),
        entry(
            labels.option("proxy"),
            3,
            "Proxy the specified host and port instead of starting a regular local server.",
        ),
        entry(
            labels.option("exit-on-sync"),
            2,
            "Exit once the first sync has occurred. Useful in deployment scripts.",
        ),
        entry(
            labels.option("sync-folder-and-contents"),
            1,
            "Sync local folder and contents (default is to sync the folder’s contents only).",
        ),
    ]
    .join("\n")
}

pub fn examples_section(labels: &Labels) -> String {
    let site = || labels.argument("site");
    let my_site = || labels.argument("my.site");
    let dev_proxy = || labels.argument("localhost:1313");
    let shorthand = labels.emphasised("(shorthand)");
    let local = || labels.command("local");
    let global = || labels.command("global");
    let sync = || labels.command("sync");
    let joined = |option: &str, value: &str| -> String {
        format!("{}{}", labels.option(option), labels.argument(value))
    };

    [
        note(labels.heading("Examples:").as_str()),
        String::new(),
        "      Develop using locally-trusted certificates:".to_string(),
        String::new(),
        example(
            labels,
            &format!("Serve current folder {shorthand}"),
            2,
            args![],
        ),
        example(
            labels,
            &format!("Serve folder {} {shorthand}", site()),
            2,
            args![site()],
        ),
        example(labels, "Serve current folder", 3, args![local()]),
        example(
            labels,
            &format!("Serve folder {}", site()),
            4,
            args![local(), site()],
        ),
        example(
            labels,
            &format!("Serve folder {} at port 666", site()),
            2,
            args![
                local(),
                site(),
                format!("{}={}", labels.option("port"), labels.argument("666")),
            ],
        ),
        String::new(),
        example(
            labels,
            &format!("Proxy {}🡘 https://localhost", dev_proxy()),
            1,
            args![labels.command("proxy"), dev_proxy()],
        ),
        String::new(),
        example(
            labels,
            &format!("Serve current folder, sync it to {}", my_site()),
            1,
            args![sync(), my_site()],
        ),
        example(
            labels,
            &format!("Serve {} folder, sync it to {}", site(), my_site()),
            1,
            args![sync(), site(), my_site()],
        ),
        example(
            labels,
            &format!("Ditto, but using the {} option", labels.option("host")),
            1,
            args![sync(), site(), joined("host=", "my.site")],
        ),
        example(
            labels,
            &format!(
                "Ditto, but use account {} on {}",
                labels.argument("me"),
                my_site()
            ),
            1,
            args![
                sync(),
                site(),
                joined("host=", "my.site"),
                joined("account=", "me"),
            ],
        ),
        example(
            labels,
            &format!(
                "Ditto, but sync to remote folder {}",
                labels.argument("www")
            ),
            1,
            args![
                sync(),
                site(),
                joined("host=", "my.site"),
                joined("account=", "me"),
                joined("folder=", "www"),
            ],
        ),
        example(
            labels,
            &format!("Ditto, but using the {} option", labels.option("to")),
            2,
            args![sync(), site(), joined("to=", "me@my-site:/home/me/www")],
        ),
        example(
            labels,
            &format!("Sync current folder, proxy {}", dev_proxy()),
            1,
            args![sync(), my_site(), joined("proxy=", "localhost:1313")],
        ),
        String::new(),
        "      Stage and deploy using globally-trusted certificates (Let’s Encrypt):".to_string(),
        String::new(),
        example(labels, "Serve current folder", 3, args![global()]),
        example(
            labels,
            &format!("Serve folder {}", site()),
            4,
            args![global(), site()],
        ),
        String::new(),
        example(
            labels,
            "Serve current folder as daemon",
            2,
            args![labels.command("enable")],
        ),
        example(
            labels,
            "Ditto & also ensure it can rsync via ssh",
            1,
            args![labels.command("enable"), labels.option("sync")],
        ),
        example(
            labels,
            "Get status of daemon",
            3,
            args![labels.command("status")],
        ),
        example(
            labels,
            "Display server logs",
            3,
            args![labels.command("logs")],
        ),
        example(
            labels,
            "Stop current daemon",
            3,
            args![labels.command("disable")],
        ),
    ]
    .join("\n")
}

pub fn footer_section(labels: &Labels) -> String {
    note(labels.footer(FURTHER_INFORMATION).as_str())
}

/// Builds the full help screen.
pub fn assemble(labels: &Labels, version: &dyn VersionProvider) -> UsageDocument {
    let document = format!(
        "\n{}\n{}\n\n{}\n\n{}\n\n{}\n\n{}",
        version_section(version),
        usage_section(labels),
        commands_section(labels),
        options_section(labels),
        examples_section(labels),
        footer_section(labels),
    );

    let document = match document.strip_prefix('\n') {
        Some(trimmed) => trimmed.to_string(),
        None => document,
    };
    debug!(
        bytes = document.len(),
        lines = document.lines().count(),
        "assembled usage document"
    );

    UsageDocument(document)
}
