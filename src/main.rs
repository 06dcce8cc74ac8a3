use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    fs, io,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

/// Drafts dashboard for a headless CMS
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: ~/.config/drafttui/config.yaml)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod handlers;
mod services;
mod ui;
mod utils;

use drafttui::api::ContentClient;
use drafttui::config::Config;
use drafttui::logic;
use drafttui::model::{self, ToastKind};
use services::api::{spawn_api_service, ApiRequest, ApiResponse};

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

pub struct App {
    pub model: model::Model,

    api_tx: tokio::sync::mpsc::UnboundedSender<ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<ApiResponse>,

    // Injected into the render path (card badges)
    content_type_labels: HashMap<String, String>,
    unknown_type_label: String,
    default_locale: String,

    // Host-side navigation: open entries in the CMS web app
    open_command: Option<String>,
    web_app_url: String,
    space_id: String,
    environment_id: String,

    /// Fetch dependencies of the last issued list request
    last_issued: Option<logic::refresh::FetchDeps>,
}

impl App {
    fn new(config: Config) -> Self {
        let client = ContentClient::new(
            config.base_url.clone(),
            config.space_id.clone(),
            config.environment_id.clone(),
            config.access_token.clone(),
        );

        // Spawn API service worker
        let (api_tx, api_rx) = spawn_api_service(client);

        App {
            model: model::Model::new(),
            api_tx,
            api_rx,
            content_type_labels: config.content_type_labels,
            unknown_type_label: config.unknown_type_label,
            default_locale: config.default_locale,
            open_command: config.open_command,
            web_app_url: config.web_app_url,
            space_id: config.space_id,
            environment_id: config.environment_id,
            last_issued: None,
        }
    }

    /// Open the selected draft in the CMS web app (fire-and-forget)
    fn open_selected_entry(&mut self) {
        let Some(entry_id) = self.model.selected_draft().map(|e| e.sys.id.clone()) else {
            return;
        };

        let Some(ref open_cmd) = self.open_command else {
            self.model
                .ui
                .show_toast(ToastKind::Error, "open_command not configured".to_string());
            return;
        };

        let url = format!(
            "{}/spaces/{}/environments/{}/entries/{}",
            self.web_app_url, self.space_id, self.environment_id, entry_id
        );

        match std::process::Command::new(open_cmd)
            .arg(&url)
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .spawn()
        {
            Ok(_) => log_debug(&format!("open_command: spawned {} {}", open_cmd, url)),
            Err(e) => {
                log_debug(&format!("Failed to execute open_command '{}': {}", open_cmd, e));
                self.model
                    .ui
                    .show_toast(ToastKind::Error, "Failed to open entry".to_string());
            }
        }
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<std::path::PathBuf> {
    use std::path::PathBuf;

    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/drafttui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("drafttui").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    // No config found, provide helpful error
    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("drafttui")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/drafttui/config.yaml".to_string()
    };

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    // Determine config file path
    let config_path = get_config_path(args.config)?;

    if args.debug {
        log_debug(&format!("Loading config from: {:?}", config_path));
    }

    // Load configuration
    let config_str = fs::read_to_string(&config_path)?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    // Initialize app
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after its display window
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(&mut app.model, response);
        }

        // Re-issue the list request whenever its dependencies changed:
        // sort order, deletion counter, or manual refresh serial.
        let deps = (
            app.model.ui.order,
            app.model.entries.deletion_counter,
            app.model.entries.refresh_serial,
        );
        if logic::refresh::needs_refetch(deps, app.last_issued) {
            let request_id = app.model.entries.begin_fetch();
            log_debug(&format!(
                "Issuing list request id={} order={}",
                request_id,
                deps.0.as_query_param()
            ));
            let _ = app.api_tx.send(ApiRequest::ListEntries {
                order: deps.0,
                request_id,
            });
            app.last_issued = Some(deps);
        }

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key)?;
            }
        }
    }

    Ok(())
}
