//! recordgrid - page and sort a record set in the terminal.
//!
//! Usage:
//!   recordgrid -s accounts.json                        # interactive list
//!   recordgrid -s accounts.json --plain --page 2       # print one page
//!   recordgrid -s accounts.json --search edge          # keyword search
//!   recordgrid -s contacts.json --scope AccountId=001  # lookup scoped to a parent
//!   recordgrid -s invoices.json --detail lines.json --link Invoice__c  # drill into line items

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use recordgrid::pager::{DEFAULT_PAGE_SIZE, SortDirection};
use recordgrid::record::SERIAL_FIELD;
use recordgrid::source::JsonFileSource;
use recordgrid::tui::App;
use recordgrid::view::common::{build_table_view, infer_columns, parse_columns};
use recordgrid::view::plain::render_plain;
use recordgrid::view::{
    DEFAULT_KEY_FIELD, HostView, ListView, LookupView, MasterDetailView, SearchView,
};

/// Parent scope given as `FIELD=VALUE`.
#[derive(Debug, Clone)]
struct ScopeArg {
    field: String,
    value: String,
}

/// Client-side record table viewer.
#[derive(Parser)]
#[command(name = "recordgrid", about = "Page and sort record sets", version)]
struct Args {
    /// JSON file holding an array of records.
    #[arg(short, long, env = "RECORDGRID_SOURCE")]
    source: String,

    /// Table title.
    #[arg(short, long, default_value = "Records")]
    title: String,

    /// Records per page.
    #[arg(long, env = "RECORDGRID_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE, value_parser = parse_page_size)]
    page_size: usize,

    /// Columns to show: comma-separated `field` or `field:Label`.
    /// Default: every field found in the records.
    #[arg(short, long)]
    columns: Option<String>,

    /// Field to sort by after loading.
    #[arg(long, value_name = "FIELD")]
    sort: Option<String>,

    /// Sort descending instead of ascending.
    #[arg(long, requires = "sort")]
    desc: bool,

    /// Page to open (clamped into range).
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    page: i64,

    /// Keyword search instead of listing every record.
    #[arg(long, value_name = "KEYWORD")]
    search: Option<String>,

    /// Restrict the search to children of one parent, e.g. AccountId=001.
    #[arg(long, value_name = "FIELD=VALUE", value_parser = parse_scope)]
    scope: Option<ScopeArg>,

    /// JSON file with child records; Enter opens the selected row's children.
    #[arg(long, value_name = "PATH", requires = "link", conflicts_with_all = ["search", "scope"])]
    detail: Option<String>,

    /// Child field holding the parent id, e.g. Invoice__c.
    #[arg(long, value_name = "FIELD", requires = "detail")]
    link: Option<String>,

    /// Parent field the link refers to.
    #[arg(long, value_name = "FIELD", default_value = DEFAULT_KEY_FIELD)]
    key: String,

    /// Number records in fetch order under an `SNo` field (list and detail modes).
    #[arg(long)]
    serial: bool,

    /// Print the page to stdout instead of starting the interactive table.
    #[arg(long)]
    plain: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,

    /// Write logs to this file. The interactive table logs nothing without it.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Where log output goes.
#[derive(Debug, PartialEq, Eq)]
enum LogTarget<'a> {
    Off,
    Stderr,
    File(&'a Path),
}

/// The interactive table owns the terminal, so it only logs to a file.
fn log_target(interactive: bool, log_file: Option<&Path>) -> LogTarget<'_> {
    match log_file {
        Some(path) => LogTarget::File(path),
        None if interactive => LogTarget::Off,
        None => LogTarget::Stderr,
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Parses a page size of at least 1.
fn parse_page_size(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("page size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid page size '{}': {}", s, e)),
    }
}

/// Parses `FIELD=VALUE`.
fn parse_scope(s: &str) -> Result<ScopeArg, String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("empty field name in scope '{}'", s));
    }
    Ok(ScopeArg {
        field: field.to_string(),
        value: value.trim().to_string(),
    })
}

/// Initializes the tracing subscriber for `target`.
fn init_logging(verbose: u8, quiet: bool, target: LogTarget<'_>) -> std::io::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive(log_level(verbose, quiet).into());

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init(),
        LogTarget::File(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
    }
    Ok(())
}

/// Picks the host view: scoped lookup, keyword search, master/detail, or full list.
fn build_view(args: &Args) -> Box<dyn HostView> {
    let source = JsonFileSource::new(&args.source);

    if let Some(scope) = &args.scope {
        let view = LookupView::new(&args.title, source, &scope.field)
            .with_parent(&scope.value)
            .with_prompt(args.search.as_deref().unwrap_or_default())
            .with_page_size(args.page_size);
        Box::new(view)
    } else if let Some(keyword) = &args.search {
        let view = SearchView::new(&args.title, source)
            .with_keyword(keyword)
            .with_page_size(args.page_size);
        Box::new(view)
    } else if let (Some(detail), Some(link)) = (&args.detail, &args.link) {
        let mut view = MasterDetailView::new(&args.title, source, JsonFileSource::new(detail), link)
            .with_key_field(&args.key)
            .with_page_size(args.page_size);
        if args.serial {
            view = view.with_serial_numbers(SERIAL_FIELD);
        }
        Box::new(view)
    } else {
        let mut view = ListView::new(&args.title, source).with_page_size(args.page_size);
        if args.serial {
            view = view.with_serial_numbers(SERIAL_FIELD);
        }
        Box::new(view)
    }
}

fn main() {
    let args = Args::parse();
    let target = log_target(!args.plain, args.log_file.as_deref());
    if let Err(e) = init_logging(args.verbose, args.quiet, target) {
        eprintln!("Error: cannot open log file: {}", e);
        std::process::exit(1);
    }

    let columns = match args.columns.as_deref().map(parse_columns).transpose() {
        Ok(columns) => columns,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut view = build_view(&args);
    view.reload();

    if let Some(field) = &args.sort {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        view.pager_mut().sort_by(field, direction);
    }
    view.pager_mut().go_to(args.page);

    if args.plain {
        let columns = columns.unwrap_or_else(|| infer_columns(view.pager().records()));
        let vm = build_table_view(view.title(), &columns, view.pager());
        print!("{}", render_plain(&vm));

        if let Some(err) = view.last_error() {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
        if let Some(status) = view.status() {
            eprintln!("{}", status);
        }
        return;
    }

    let app = App::new(view, columns.unwrap_or_default());
    if let Err(e) = app.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
