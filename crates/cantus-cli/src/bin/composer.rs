//! The composer: derives a short piece from a name and writes it as WAV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cantus_audio::{
    render_voice, render_voice_mono, reverb, wav, AudioError, MonoBuffer, StereoBuffer,
    SAMPLE_RATE,
};
use cantus_music::Composition;

/// Compose a short piece from a name and write it as a WAV file.
#[derive(Parser)]
#[command(name = "composer", version, about, long_about = None)]
struct Cli {
    /// Name to compose for.
    #[arg(default_value = "Mahler")]
    name: String,

    /// Output WAV path.
    #[arg(default_value = "output.wav")]
    out_path: PathBuf,

    /// Render the single-channel configuration (dry, no reverb).
    #[arg(long)]
    mono: bool,
}

const REVIEWS: [&str; 8] = [
    "This is either a masterpiece or a war crime. Possibly both.",
    "Debussy would weep. Not from beauty, but from confusion.",
    "If elevator music had an evil twin, this would be it.",
    "Certified banger. In the sense that it bangs pots and pans.",
    "This composition has been reported to the Geneva Convention.",
    "Your neighbors will love this. Play it at 3am for best results.",
    "Mozart rolled over in his grave. Then rolled back. Then left.",
    "This is what happens when math tries to be art.",
];

fn fatal(err: AudioError) -> anyhow::Error {
    anyhow::anyhow!("{}: {}", err.code(), err)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let piece = Composition::from_name(&cli.name)
        .with_context(|| format!("could not compose for '{}'", cli.name))?;
    let plan = &piece.blueprint;

    println!();
    println!("  {}", "CURSED COMPOSER".bold());
    println!("  {}", "═══════════════".dimmed());
    println!();
    println!("  {} {}", "Composing for:".cyan(), plan.name);
    println!(
        "  {} {} {}",
        "Key:".cyan(),
        plan.root,
        plan.mode.name()
    );
    println!("  {} {} BPM", "Tempo:".cyan(), plan.tempo_bpm);

    let progression: Vec<String> = piece.chords.iter().map(|c| c.symbol()).collect();
    println!("  {} {}", "Progression:".cyan(), progression.join(" "));

    let scale_notes: Vec<String> = piece.scale.notes.iter().map(|n| n.to_string()).collect();
    println!(
        "  {} {} ({})",
        "Scale:".cyan(),
        piece.scale.kind.name(),
        scale_notes.join(" ")
    );

    let frames_used = if cli.mono {
        let mut buf = MonoBuffer::new().map_err(fatal)?;
        for voice in &piece.voices {
            render_voice_mono(&mut buf, voice);
        }
        wav::write_mono_file(&cli.out_path, &buf).map_err(fatal)?;
        buf.frames_used()
    } else {
        let mut buf = StereoBuffer::new().map_err(fatal)?;
        for voice in &piece.voices {
            render_voice(&mut buf, voice);
        }
        reverb::apply(&mut buf);
        wav::write_stereo_file(&cli.out_path, &buf).map_err(fatal)?;
        buf.frames_used()
    };

    println!(
        "  {} {:.1} seconds",
        "Duration:".cyan(),
        frames_used as f64 / SAMPLE_RATE as f64
    );
    println!(
        "  {} {}",
        "Wrote:".cyan(),
        cli.out_path.display().to_string().green()
    );
    println!(
        "  {} aplay {}  (or: ffplay -nodisp {})",
        "Play it:".dimmed(),
        cli.out_path.display(),
        cli.out_path.display()
    );
    println!();
    println!(
        "  {} {}",
        "Review:".yellow(),
        REVIEWS[(plan.seed % REVIEWS.len() as u32) as usize]
    );
    println!();

    Ok(())
}
