//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-13
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler with timed clear

use anyhow::{Context, Result};
use arboard::Clipboard;
use std::{env, process, thread, time::Duration};

/// Seconds a copied password stays on the clipboard before the daemon
/// clears it (unless the user copied something else in the meantime).
pub const DEFAULT_CLEAR_SECS: u64 = 45;

const DAEMON_ENV: &str = "CLIPBOARD_DAEMON";
const SECRET_ENV: &str = "CLIPBOARD_SECRET";
const TTL_ENV: &str = "CLIPBOARD_TTL";

/// Copy `secret` to the clipboard and spawn a detached helper process that
/// clears it after `clear_secs`.
pub fn copy_to_clipboard(secret: &str, clear_secs: u64) -> Result<()> {
    let mut ctx = Clipboard::new().context("failed to open clipboard")?;
    ctx.set_text(secret).context("failed to set clipboard text")?;
    spawn_daemon(secret, clear_secs)?;
    Ok(())
}

/// True when this process was re-executed as the clear daemon; the caller
/// must run [`daemon_main`] and exit without touching the CLI.
pub fn is_daemon_process() -> bool {
    env::var(DAEMON_ENV).is_ok()
}

/// Daemon entry: sleep, then clear the clipboard only if it still holds the
/// secret we copied.
pub fn daemon_main() -> Result<()> {
    let secret = env::var(SECRET_ENV).context("missing clipboard daemon secret")?;
    let ttl = parse_clear_secs(env::var(TTL_ENV).ok());

    thread::sleep(Duration::from_secs(ttl));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::warn!("clipboard daemon could not open clipboard: {}", e);
            return Ok(());
        }
    };

    let current = ctx.get_text().unwrap_or_default();
    if current == secret {
        ctx.set_text("").context("failed to clear clipboard")?;
        log::debug!("clipboard cleared after {}s", ttl);
    } else {
        log::debug!("clipboard changed since copy, leaving it alone");
    }
    Ok(())
}

/// TTL handed to the daemon through the environment; a missing or
/// unparsable value falls back to the default instead of failing the clear.
pub fn parse_clear_secs(raw: Option<String>) -> u64 {
    raw.and_then(|v| v.parse().ok()).unwrap_or(DEFAULT_CLEAR_SECS)
}

fn spawn_daemon(secret: &str, clear_secs: u64) -> Result<()> {
    let exe_path = env::current_exe()?;

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(TTL_ENV, clear_secs.to_string())
            .stdout(process::Stdio::null())
            .stderr(process::Stdio::null())
            .process_group(0);
        cmd.spawn()?;
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(TTL_ENV, clear_secs.to_string())
            .stdout(process::Stdio::null())
            .stderr(process::Stdio::null())
            .creation_flags(0x08000000); // CREATE_NO_WINDOW
        cmd.spawn()?;
    }

    Ok(())
}
