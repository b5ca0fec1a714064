// SPDX-License-Identifier: MPL-2.0
use overlay_coordinator::config;
use overlay_coordinator::domain::region::Region;
use overlay_coordinator::error::{Error, Result};
use overlay_coordinator::i18n::I18n;
use overlay_coordinator::overlay::{
    driver, DialogParams, Overlay, OverlaySettings, PageLayout, Toast, ToastKind,
};
use overlay_coordinator::paths;
use std::time::Duration;

const HELP: &str = "\
overlay-demo: runs a scripted toast/menu/dialog sequence and logs surface states

USAGE:
  overlay-demo [OPTIONS]

OPTIONS:
  --lang <LANG>         UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --width <PX>          Initial viewport width [default: 1024]
  --verbose             Debug logging
  -h, --help            Print help
";

#[derive(Debug)]
struct Flags {
    lang: Option<String>,
    config_dir: Option<String>,
    width: u32,
    verbose: bool,
}

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let invalid = |err: pico_args::Error| Error::InvalidArgument(err.to_string());
    let flags = Flags {
        verbose: args.contains("--verbose"),
        lang: args.opt_value_from_str("--lang").map_err(invalid)?,
        config_dir: args.opt_value_from_str("--config-dir").map_err(invalid)?,
        width: args
            .opt_value_from_str("--width")
            .map_err(invalid)?
            .unwrap_or(1024),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        return Err(Error::InvalidArgument(format!("unexpected arguments: {rest:?}")));
    }
    Ok(Some(flags))
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("overlay_coordinator=debug,overlay_demo=debug")
        } else {
            EnvFilter::new("overlay_coordinator=info,overlay_demo=info")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

fn demo_layout() -> PageLayout {
    PageLayout::new()
        .menu(Region::Main, "filters")
        .menu(Region::Aside, "cart")
        .dialog(Region::Full, "logout")
        .with_side_bar()
        .with_nav_bar()
}

fn log_surfaces(overlay: &Overlay) {
    for region in Region::ALL {
        let surfaces = overlay.surfaces(region);
        let toast = surfaces.toast.content().map(|c| c.text()).unwrap_or_default();
        tracing::info!(
            %region,
            %toast,
            menu_hidden = surfaces.menu.is_hidden(),
            dialog_hidden = surfaces.dialog.is_hidden(),
            backdrop_hidden = surfaces.backdrop.is_hidden(),
            "surfaces"
        );
    }
    let chrome = overlay.chrome();
    tracing::info!(
        side_bar_hidden = ?chrome.side_bar_hidden(),
        nav_bar_hidden = ?chrome.nav_bar_hidden(),
        aside_hidden = overlay.aside().is_hidden(),
        "chrome"
    );
}

async fn run(flags: Flags) -> Result<()> {
    paths::init_cli_override(flags.config_dir);
    let (config, warning) = config::load();
    let i18n = I18n::new(flags.lang, &config);
    if let Some(key) = warning {
        tracing::warn!(warning = %i18n.tr(&key), "config");
    }

    let settings = OverlaySettings::from_config(&config, &i18n);
    let menu = settings.menu_duration;
    let dialog = settings.dialog_duration;
    let aside = settings.aside_duration;
    let mut overlay = Overlay::new(&demo_layout(), settings, driver::clock_now());

    if let Some(change) = overlay.resize(flags.width) {
        tracing::info!(width = flags.width, mode = ?change.mode, "initial layout");
    }

    overlay.notify(Toast::new(i18n.tr("demo-toast-welcome")).kind(ToastKind::Success));
    let opened_menu = overlay.show_menu("filters", menu, Region::Main);
    let opened_aside = overlay.open_aside(aside);
    driver::run_for(&mut overlay, Duration::from_secs(1)).await;
    let (menu_outcome, aside_outcome) = futures_util::future::join(opened_menu, opened_aside).await;
    tracing::info!(?menu_outcome, ?aside_outcome, "menu and aside opened");
    log_surfaces(&overlay);

    if let Some(closing) = overlay.backdrop_clicked(Region::Main) {
        driver::run_for(&mut overlay, Duration::from_secs(1)).await;
        let outcome = closing.await;
        tracing::info!(?outcome, "menu closed by backdrop click");
    }

    let params = DialogParams::new(
        i18n.tr("demo-dialog-logout-title"),
        i18n.tr("demo-dialog-logout-message"),
    );
    let opened = overlay.open_dialog(params, dialog, Region::Full);
    driver::run_until_idle(&mut overlay).await;
    let handle = opened.await?;
    log_surfaces(&overlay);

    if let Some(closing) = overlay.confirm_dialog(&handle, dialog)? {
        driver::run_until_idle(&mut overlay).await;
        closing.await?;
    }

    let _ = overlay.close_aside(aside);
    overlay.resize(320);
    driver::run_until_idle(&mut overlay).await;
    log_surfaces(&overlay);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return std::process::ExitCode::FAILURE;
        }
    };
    setup_tracing(flags.verbose);

    match run(flags).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "demo failed");
            std::process::ExitCode::FAILURE
        }
    }
}
