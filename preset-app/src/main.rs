// rigpreset test application -- CLI tool for exercising the preset store
// and the command dispatcher against the mock backend.
//
// Usage:
//   preset-app --config rigpreset.ini list
//   preset-app --config rigpreset.ini active
//   preset-app --config rigpreset.ini recall 1
//   preset-app --config rigpreset.ini save-cat 2 --name Portable --rig FT-817 \
//       --port /dev/ttyUSB1 --baud 4800
//   preset-app --config rigpreset.ini apply-config 3
//   preset-app --config rigpreset.ini apply-memory 7
//   preset-app --config rigpreset.ini send "FREQA 14074000"
//   preset-app --config rigpreset.ini freq 14.074
//   preset-app --config rigpreset.ini ptt off
//
// Every dispatching command binds the backend named by the active
// interface, sends, and releases -- the same cycle the library enforces
// for real hardware. The backend here is the recording mock, so the tool
// works without a radio attached; its call log is printed after each
// dispatch.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rigpreset::actions;
use rigpreset::{
    CatDispatcher, CatPreset, ConfigFile, ConfigPreset, MemoryPreset, SectionStore,
    DEFAULT_READ_TIMEOUT, NUM_CAT_PRESETS, NUM_CONFIG_COMMANDS, NUM_CONFIG_PRESETS,
    NUM_MEMORY_PRESETS,
};
use rigpreset_test_harness::MockFactory;

/// rigpreset test application -- exercises presets and dispatch from the
/// command line.
#[derive(Parser)]
#[command(name = "preset-app", version, about)]
struct Cli {
    /// Path to the preset config file. Created on first save.
    #[arg(long, default_value = "rigpreset.ini")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every saved preset with its name.
    List,

    /// Show the active interface configuration.
    Active,

    /// Recall a saved CAT interface preset into the active interface.
    Recall {
        /// Preset slot (1-4).
        id: i32,
    },

    /// Save a CAT interface preset.
    SaveCat {
        /// Preset slot (1-4).
        id: i32,
        /// Preset name shown in listings.
        #[arg(long, default_value = "")]
        name: String,
        /// Rig name (e.g. FT-817, FT-991, IC-7000).
        #[arg(long, default_value = "")]
        rig: String,
        /// Serial port path (e.g. /dev/ttyUSB0, COM3).
        #[arg(long, default_value = "")]
        port: String,
        /// Baud rate.
        #[arg(long, default_value = "38400")]
        baud: String,
        /// Data bits (5, 6, 7, 8).
        #[arg(long, default_value = "8")]
        data: String,
        /// Parity (NONE, EVEN, ODD).
        #[arg(long, default_value = "NONE")]
        parity: String,
        /// Stop bits (1, 1.5, 2).
        #[arg(long, default_value = "1")]
        stop: String,
    },

    /// Send a config preset's command sequence to the rig.
    ApplyConfig {
        /// Preset slot (1-6).
        id: i32,
    },

    /// Put the rig on a memory preset's channel.
    ApplyMemory {
        /// Preset slot (1-32).
        id: i32,
    },

    /// Send a one-shot CAT command line.
    Send {
        /// The command line, e.g. "FREQA 14074000".
        line: String,
    },

    /// Tune VFO-A.
    Freq {
        /// Frequency in MHz (e.g. 14.074).
        mhz: f64,
    },

    /// Key or unkey the transmitter.
    Ptt {
        /// "on" or "off".
        state: PttState,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PttState {
    On,
    Off,
}

fn cmd_list(store: &ConfigFile) -> Result<()> {
    println!("CAT interface presets:");
    for id in 1..=NUM_CAT_PRESETS as i32 {
        let mut p = CatPreset::new(id);
        p.hydrate(store);
        let name = if p.preset_name().is_empty() {
            "(empty)"
        } else {
            p.preset_name()
        };
        println!("  {id}  {name:<20}  {} {}", p.rig(), p.port());
    }

    println!();
    println!("Config presets:");
    for id in 1..=NUM_CONFIG_PRESETS as i32 {
        let mut p = ConfigPreset::new(id);
        p.hydrate(store);
        let count = (0..NUM_CONFIG_COMMANDS)
            .filter(|&i| !p.command(i).is_empty())
            .count();
        let name = if p.preset_name().is_empty() {
            "(empty)"
        } else {
            p.preset_name()
        };
        println!("  {id}  {name:<20}  {count} command(s)");
    }

    println!();
    println!("Memory presets:");
    for id in 1..=NUM_MEMORY_PRESETS as i32 {
        let mut p = MemoryPreset::new(id);
        p.hydrate(store);
        if p.preset_desc().is_empty() {
            continue;
        }
        println!(
            "  {id:>2}  {:<20}  {:.6}/{:.6} MHz  {}/{}  split:{}",
            p.preset_desc(),
            p.vfoa_freq_mhz(),
            p.vfob_freq_mhz(),
            p.mode_a(),
            p.mode_b(),
            if p.split() { "ON" } else { "OFF" },
        );
    }

    Ok(())
}

fn cmd_active(store: &ConfigFile) -> Result<()> {
    println!("Active interface:");
    for key in ["PRESET", "RIG", "PORT", "BAUD", "DATA", "PARITY", "STOP"] {
        println!("  {key:<7} {}", store.get("CAT", key));
    }
    Ok(())
}

fn cmd_save_cat(store: &mut ConfigFile, cmd: &Command) -> Result<()> {
    let Command::SaveCat {
        id,
        name,
        rig,
        port,
        baud,
        data,
        parity,
        stop,
    } = cmd
    else {
        unreachable!()
    };

    let mut p = CatPreset::new(*id);
    p.set_preset_name(name);
    p.set_rig(rig);
    p.set_port(port);
    p.set_baud(baud);
    p.set_data(data);
    p.set_parity(parity);
    p.set_stop(stop);
    p.persist(store);
    println!("Saved CAT preset {id} ({name})");
    Ok(())
}

/// Print the mock backend's call log after a dispatch, so the tool shows
/// what a real rig would have received.
fn print_mock_log(factory_state: &std::sync::Arc<std::sync::Mutex<rigpreset_test_harness::MockState>>) {
    let state = match factory_state.lock() {
        Ok(s) => s,
        Err(_) => return,
    };
    for call in &state.split_log {
        println!(
            "[mock] split: A={} Hz {}  B={} Hz {}  split={}",
            call.freq_a_hz, call.mode_a, call.freq_b_hz, call.mode_b, call.split
        );
    }
    for (opcode, args) in &state.ascii_log {
        if args.is_empty() {
            println!("[mock] {opcode}");
        } else {
            println!("[mock] {opcode} {args}");
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut store = ConfigFile::open(&cli.config)
        .with_context(|| format!("failed to open config file {}", cli.config))?;

    // The mock is the only backend shipped with the workspace; real
    // hardware backends plug in through the same factory seam.
    let factory = MockFactory::new();
    let log = factory.handle();
    let mut dispatcher = CatDispatcher::new(Box::new(factory));

    match &cli.command {
        Command::List => cmd_list(&store),
        Command::Active => cmd_active(&store),
        Command::Recall { id } => {
            actions::recall_cat_preset(&mut store, *id);
            println!("Recalled CAT preset {id}");
            cmd_active(&store)
        }
        cmd @ Command::SaveCat { .. } => cmd_save_cat(&mut store, cmd),
        Command::ApplyConfig { id } => {
            actions::apply_config_preset(&store, &mut dispatcher, *id, DEFAULT_READ_TIMEOUT)
                .context("failed to apply config preset")?;
            print_mock_log(&log);
            Ok(())
        }
        Command::ApplyMemory { id } => {
            actions::apply_memory_preset(&store, &mut dispatcher, *id, DEFAULT_READ_TIMEOUT)
                .context("failed to apply memory preset")?;
            print_mock_log(&log);
            Ok(())
        }
        Command::Send { line } => {
            let response =
                actions::send_adhoc_command(&store, &mut dispatcher, line, DEFAULT_READ_TIMEOUT)
                    .context("failed to send command")?;
            println!("{response}");
            Ok(())
        }
        Command::Freq { mhz } => {
            actions::set_vfoa_frequency(&store, &mut dispatcher, *mhz, DEFAULT_READ_TIMEOUT)
                .context("failed to set frequency")?;
            print_mock_log(&log);
            Ok(())
        }
        Command::Ptt { state } => {
            let on = matches!(state, PttState::On);
            actions::set_ptt(&store, &mut dispatcher, on).context("failed to key PTT")?;
            print_mock_log(&log);
            Ok(())
        }
    }
}
