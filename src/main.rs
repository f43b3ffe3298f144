//! cubescan CLI
//!
//! Usage:
//!   cubescan --cube <54 chars>               # Validate + solve one cube string
//!   cubescan --translate "R U' F2"           # Translate a move sequence
//!   cubescan --interactive                   # Interactive face-by-face scan
//!   cubescan --serve                         # HTTP API server
//!   cubescan --cube <...> --json             # JSON output

use clap::Parser;
use std::io::{self, BufRead, Write};

use cubescan::core::{
    run_server, translate_sequence, validate, FrameSampler, HttpSolver, MockSolver, ScanSession,
    SolverBackend,
};
use cubescan::types::{FaceString, ScanPhase};
use cubescan::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "cubescan",
    version = VERSION,
    about = "Scan a 3x3x3 cube face by face, validate the state and fetch a solution",
    long_about = "cubescan assembles a 54-character cube state from six scanned faces,\n\
                  validates it locally and submits it to an external solving service.\n\n\
                  Modes:\n  \
                  --interactive  Scan six faces from photos or typed face strings\n  \
                  --cube         Validate and solve a ready-made cube string\n  \
                  --translate    Translate a move sequence to instructions\n  \
                  --serve        HTTP API server mode\n\n\
                  Phases:\n  \
                  EMPTY     - No faces captured yet\n  \
                  SCANNING  - 1 to 5 faces captured\n  \
                  READY     - All 6 faces captured, cube string available"
)]
struct Args {
    /// 54-character cube string to validate and solve
    #[arg(short, long)]
    cube: Option<String>,

    /// Whitespace-separated move sequence to translate
    #[arg(short, long)]
    translate: Option<String>,

    /// Interactive scan mode - read face photos or 9-char strings from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Base URL of the external solving service; omitted = canned mock solver
    #[arg(long)]
    solver_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else if let Some(ref sequence) = args.translate {
        run_translate(sequence, &args);
    } else if let Some(ref cube) = args.cube {
        run_solve(cube, &args).await;
    } else if args.interactive {
        run_interactive(&args).await;
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args).await;
    }
}

fn solver_backend(args: &Args) -> SolverBackend {
    match &args.solver_url {
        Some(url) => SolverBackend::Http(HttpSolver::new(url.clone())),
        None => SolverBackend::Mock(MockSolver::default()),
    }
}

/// Translate a move sequence and print the instructions
fn run_translate(sequence: &str, args: &Args) {
    let tokens: Vec<String> = sequence.split_whitespace().map(String::from).collect();
    let steps = translate_sequence(&tokens);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps).unwrap_or_default());
        return;
    }

    for (i, step) in steps.iter().enumerate() {
        println!("Step {}: {}", i + 1, step);
    }
}

/// Validate one cube string, solve it and print the translated steps
async fn run_solve(cube: &str, args: &Args) {
    let cube = match validate(cube) {
        Ok(cube) => cube,
        Err(e) => {
            print_error(&format!("{} ({})", e, e.reason().code()), args.no_color);
            std::process::exit(1);
        }
    };

    let solver = solver_backend(args);
    let moves = match solver.solve(&cube).await {
        Ok(moves) => moves,
        Err(e) => {
            print_error(&format!("{} ({})", e, e.reason().code()), args.no_color);
            std::process::exit(1);
        }
    };

    let steps = translate_sequence(&moves);

    if args.json {
        #[derive(serde::Serialize)]
        struct SolveOutput {
            cube: String,
            moves: Vec<String>,
            steps: Vec<String>,
        }
        let out = SolveOutput {
            cube: cube.as_string(),
            moves,
            steps,
        };
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
        return;
    }

    println!("Cube: {}", cube.as_string());
    println!("Solution: {}", moves.join(" "));
    for (i, step) in steps.iter().enumerate() {
        println!("Step {}: {}", i + 1, step);
    }
}

/// Interactive scan mode: one face per line, photo path or 9-char string
async fn run_interactive(args: &Args) {
    let sampler = FrameSampler::default();
    let mut session = ScanSession::new();

    print_header("Scan Mode", args.no_color);
    println!("Enter one face per line: a photo path (e.g. face1.png) or a");
    println!("9-character face string (e.g. UUFUUFDDB), row-major order.");
    println!("Commands: 'reset' to start over, 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(&session, args.no_color);
        print!("{}", prompt);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Faces captured: {}", session.captured());
            break;
        }
        if line.eq_ignore_ascii_case("reset") {
            session.reset();
            println!("Session reset.");
            continue;
        }
        if line.is_empty() {
            continue;
        }

        let face = match acquire_face(line, &sampler) {
            Ok(face) => face,
            Err(message) => {
                print_error(&message, args.no_color);
                continue;
            }
        };

        let progress = match session.submit_face(face) {
            Ok(progress) => progress,
            Err(e) => {
                print_error(&format!("{} ({})", e, e.reason().code()), args.no_color);
                continue;
            }
        };

        if args.json {
            println!("{}", serde_json::to_string(&progress).unwrap_or_default());
        } else if args.no_color {
            println!("{}", progress.to_parseable_string());
        } else {
            println!("{}", progress.to_terminal_string());
            println!("  {}", render_face(&progress.face));
        }

        if session.is_complete() {
            finish_scan(&session, args).await;
            println!("Type 'reset' to scan another cube or 'quit' to exit.");
        }
    }
}

/// Turn one input line into a face string: photo path or typed labels
fn acquire_face(line: &str, sampler: &FrameSampler) -> Result<FaceString, String> {
    if let Some(face) = FaceString::parse(line) {
        return Ok(face);
    }

    if std::path::Path::new(line).exists() {
        let photo = image::open(line)
            .map_err(|e| format!("could not decode {}: {}", line, e))?
            .to_rgb8();
        return sampler
            .sample_face(&photo)
            .map_err(|e| format!("{} ({})", e, e.reason().code()));
    }

    Err(format!(
        "'{}' is neither a readable photo nor a 9-character face string",
        line
    ))
}

/// Validate the completed session and run the solve flow
async fn finish_scan(session: &ScanSession, args: &Args) {
    let cube_string = match session.cube_string() {
        Ok(s) => s,
        Err(e) => {
            print_error(&e.to_string(), args.no_color);
            return;
        }
    };

    println!();
    println!("All 6 faces captured.");
    println!("Cube string: {}", cube_string);

    let cube = match validate(&cube_string) {
        Ok(cube) => cube,
        Err(e) => {
            print_error(
                &format!("{} ({}) - reset and rescan", e, e.reason().code()),
                args.no_color,
            );
            return;
        }
    };

    let solver = solver_backend(args);
    match solver.solve(&cube).await {
        Ok(moves) => {
            let steps = translate_sequence(&moves);
            println!("Solution: {}", moves.join(" "));
            for (i, step) in steps.iter().enumerate() {
                println!("Step {}: {}", i + 1, step);
            }
        }
        Err(e) => {
            print_error(&format!("{} ({})", e, e.reason().code()), args.no_color);
        }
    }
    println!();
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  cubescan v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  cubescan v{} - {}\x1b[0m", VERSION, mode);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!();
}

/// Format scan prompt with phase and progress
fn format_prompt(session: &ScanSession, no_color: bool) -> String {
    let phase = session.phase();
    let cursor = session
        .cursor()
        .map(|c| format!("face {}/6", c))
        .unwrap_or_else(|| "complete".to_string());

    if no_color {
        format!("[{} | {}] > ", phase, cursor)
    } else {
        format!(
            "{}{} [{} | {}]{} > ",
            phase.color_code(),
            phase.emoji(),
            phase,
            cursor,
            ScanPhase::color_reset()
        )
    }
}

/// Render a face string with one sticker-colored block per facelet
fn render_face(face: &FaceString) -> String {
    use cubescan::types::Facelet;

    let mut out = String::new();
    for label in face.labels() {
        out.push_str(label.color_code());
        out.push(label.as_char());
        out.push_str(Facelet::color_reset());
    }
    out
}

/// Print an error line
fn print_error(message: &str, no_color: bool) {
    if no_color {
        println!("error: {}", message);
    } else {
        println!("\x1b[31merror: {}\x1b[0m", message);
    }
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!();
    println!("cubescan API server v{}", VERSION);
    println!();

    let solver = solver_backend(args);
    if let Err(e) = run_server(&args.addr, solver).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
