//! The musical horoscope: what does your name sound like?

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rand::Rng;

use cantus_music::{
    create_rng, seed_from_name, Chord, ChordKind, Interval, KeySignature, Mode, Note, Quality,
    Scale, ScaleKind, Tone,
};

/// Derive a musical personality reading from a name.
#[derive(Parser)]
#[command(name = "horoscope", version, about, long_about = None)]
struct Cli {
    /// Name to read.
    #[arg(default_value = "Mahler")]
    name: String,
}

fn mood(quality: Quality) -> &'static str {
    match quality {
        Quality::Diminished => "deeply suspicious of everyone around you",
        Quality::Minor => "contemplating the meaning of existence",
        Quality::Major => "annoyingly optimistic for no reason",
        Quality::Augmented => "about to do something chaotic and irreversible",
        Quality::Perfect => "smugly superior (and correct about it)",
    }
}

fn vibe(kind: ChordKind) -> &'static str {
    match kind {
        ChordKind::MajorTriad => "a golden retriever in human form",
        ChordKind::MinorTriad => "a poet who only writes in the rain",
        ChordKind::AugmentedTriad => "that friend who always escalates the situation",
        ChordKind::DiminishedTriad => "a detective in a noir film who trusts nobody",
        ChordKind::Diminished7 => "a supervillain monologuing before their plan fails",
        ChordKind::HalfDiminished7 => "someone who almost committed but backed out",
        ChordKind::Minor7 => "a jazz cat at 2am who knows too much",
        ChordKind::Major7 => "a sunset that makes strangers cry on the bus",
        ChordKind::Dominant7 => "the person who HAS to resolve every argument",
    }
}

fn destiny(kind: ScaleKind) -> &'static str {
    match kind {
        ScaleKind::Major => "You will find a $20 bill in an old jacket.",
        ScaleKind::NaturalMinor => "You will dramatically stare out a window today.",
        ScaleKind::HarmonicMinor => {
            "A mysterious stranger will ask you for directions. They are not lost."
        }
        ScaleKind::MelodicMinor => {
            "You will ascend to greatness, then immediately descend into snacking."
        }
        ScaleKind::PentatonicMajor => {
            "You will hum a tune that gets stuck in 4 people's heads."
        }
        ScaleKind::PentatonicMinor => {
            "You are destined to play a sick guitar solo. Somewhere. Someday."
        }
        ScaleKind::Blues => "Your soul is too funky for this mortal plane.",
        ScaleKind::WholeTone => "You will float through the day like a Debussy fever dream.",
        ScaleKind::OctatonicHalfWhole => "Chaos follows you, but in a cool way.",
        ScaleKind::OctatonicWholeHalf => {
            "You are two half-steps away from enlightenment at all times."
        }
    }
}

fn key_roast(alter: i32) -> &'static str {
    match alter {
        0 => "Zero accidentals. You are the C major of people: basic, but functional.",
        1 => "One sharp? How adventurous. You put salt on your food sometimes.",
        -1 => "One flat. You're the 'I'll have what they're having' of music.",
        a if a >= 5 => "5+ sharps?! You don't read music, music reads YOU.",
        a if a <= -5 => "5+ flats?! You live in a world of suffering and enharmonic nightmares.",
        a if a > 0 => "A few sharps. Edgy enough to be interesting, not enough to be a problem.",
        _ => "A few flats. You have a gentle melancholy, like a slightly deflated balloon.",
    }
}

const WISDOMS: [&str; 8] = [
    "Remember: every dissonance resolves... eventually.",
    "You are the tritone in someone's perfect cadence.",
    "Life is a fermata. Hold on as long as you need.",
    "Be the accidental someone didn't expect but secretly needed.",
    "Your rest notes matter more than your played notes.",
    "Modulate to a new key when life gets boring.",
    "Every cadence is just a fancy way of saying goodbye.",
    "The circle of fifths always brings you back home.",
];

fn accidental_remark(accidental: i8) -> &'static str {
    match accidental {
        a if a >= 2 => "You are double-sharp. Overachiever.",
        1 => "You are sharp. Literally and figuratively.",
        0 => "You are natural. Boringly pure.",
        -1 => "You are flat. Like your sense of humor.",
        _ => "You are double-flat. You've flatlined.",
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let seed = seed_from_name(&cli.name);
    let mut rng = create_rng(seed);

    let root = Note::new(
        Tone::from_index(rng.gen_range(0..7)),
        rng.gen_range(-2i8..=2),
        rng.gen_range(0i8..8),
    );
    let chord_kind = ChordKind::ALL[rng.gen_range(0..ChordKind::ALL.len())];
    let scale_kind = ScaleKind::ALL[rng.gen_range(0..ScaleKind::ALL.len())];
    let quality = Quality::ALL[rng.gen_range(0..Quality::ALL.len())];
    let interval_steps = rng.gen_range(1u8..=7);

    println!();
    println!("  {}", "♪♫♪ MUSICAL HOROSCOPE ♪♫♪".bold());
    println!("  {}", "══════════════════════════".dimmed());
    println!();
    println!("  {} {}", "Subject:".cyan(), cli.name);
    println!();

    println!("  {} {}", "★ Your Soul Note:".yellow(), root);
    println!("    {}", accidental_remark(root.accidental));
    println!();

    let chord = Chord::build(root, chord_kind)?;
    let chord_notes: Vec<String> = chord.notes.iter().map(|n| n.to_string()).collect();
    println!(
        "  {} {} {}",
        "★ Your Spirit Chord:".yellow(),
        root,
        chord_kind.name()
    );
    println!("    Notes: {}", chord_notes.join(" "));
    println!("    Personality: You are {}.", vibe(chord_kind));
    println!();

    let scale = Scale::build(root, scale_kind)?;
    let scale_notes: Vec<String> = scale.notes.iter().map(|n| n.to_string()).collect();
    println!(
        "  {} {} {}",
        "★ Your Life Scale:".yellow(),
        root,
        scale_kind.name()
    );
    println!("    Notes: {}", scale_notes.join(" "));
    println!("    Destiny: {}", destiny(scale_kind));
    println!();

    let key = KeySignature::of(root.with_octave(0), Mode::Major);
    println!(
        "  {} {} {}",
        "★ Your Key Signature:".yellow(),
        key.size(),
        if key.alter >= 0 { "sharp(s)" } else { "flat(s)" }
    );
    println!("    Verdict: {}", key_roast(key.alter));
    println!();

    let interval = Interval::new(interval_steps, quality);
    print!("  {} ", "★ Your Interval of Destiny:".yellow());
    match root.interval_up(interval) {
        Ok(dest) => println!("{root} → {dest} (a {interval})"),
        Err(err) => println!("FORBIDDEN INTERVAL ({err})"),
    }
    println!("    Today you are {}.", mood(quality));
    println!();

    let soulmate = key.relative()?;
    println!(
        "  {} {} {}",
        "★ Your Musical Soulmate:".yellow(),
        soulmate.root,
        soulmate.mode.name()
    );
    println!("    (They complete your harmonic series.)");
    println!();

    // The next letter up, respelled downward, is enharmonic exactly when the
    // gap is a half step (E-F and B-C) or the accidentals absorb it.
    let half_step_gap = matches!(root.tone, Tone::E | Tone::B);
    let twin = Note::new(
        Tone::from_index(root.tone.index() + 1),
        root.accidental - if half_step_gap { 1 } else { 2 },
        root.octave,
    );
    if root.is_enharmonic(twin) {
        println!("  {} {}", "★ Your Enharmonic Twin:".yellow(), twin);
        println!("    Same person, different font.");
    } else {
        println!(
            "  {} You are unique. Nobody sounds like you.",
            "★ Enharmonic Twin:".yellow()
        );
        println!("    (This is not necessarily a compliment.)");
    }
    println!();

    println!(
        "  {} {}",
        "♪ Final Wisdom:".cyan(),
        WISDOMS[(seed % WISDOMS.len() as u32) as usize]
    );
    println!();

    Ok(())
}
