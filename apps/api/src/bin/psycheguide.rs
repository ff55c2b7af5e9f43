//! Terminal front-end: walks a student through the questionnaire and prints
//! the report returned by the scoring service at `API_BASE_URL`.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use psycheguide::assessment::questions::QUESTIONS;
use psycheguide::client::store::FileResultStore;
use psycheguide::client::wizard::{Screen, Wizard};
use psycheguide::client::HttpAnalysisClient;
use psycheguide::config::ClientConfig;
use psycheguide::models::{AnalysisResult, StudentInfo};

const HOW_IT_WORKS: &str = "\
1. Tell us about yourself: name, age, grade and favorite subjects.
2. Answer 17 short questions about personality, interests and strengths.
3. Your answers are matched against Big Five and RIASEC keyword profiles.
4. Get a report with traits, interests, strengths and career ideas.";

const METHODOLOGY: &str = "\
Personality is described with the Big Five model (Openness, Conscientiousness,
Extraversion, Agreeableness, Neuroticism). Interests use the RIASEC typology
(Realistic, Investigative, Artistic, Social, Enterprising, Conventional).
Scores are keyword counts over your answers, not a validated clinical instrument.";

struct Terminal<R> {
    input: R,
}

impl<R: BufRead> Terminal<R> {
    fn prompt(&mut self, label: &str) -> Result<String> {
        print!("{label}: ");
        io::stdout().flush()?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        anyhow::ensure!(read > 0, "input closed");
        Ok(line.trim().to_string())
    }

    fn choose(&mut self, label: &str, max: usize) -> Result<usize> {
        loop {
            let raw = self.prompt(label)?;
            match raw.parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => return Ok(n - 1),
                _ => println!("Please enter a number between 1 and {max}."),
            }
        }
    }
}

fn print_report(result: &AnalysisResult) {
    println!("\n=== Your PsycheGuide Report ===\n");
    println!("{}\n", result.summary);

    println!("Personality");
    for t in &result.personality_traits {
        println!("  {:<18} {:>3.0}%  {}", t.name.label(), t.score * 100.0, t.description);
    }

    println!("\nInterests");
    for i in &result.interest_profile {
        println!("  {:<18} {:>3.0}%  {}", i.category.label(), i.score * 100.0, i.description);
    }

    println!("\nStrengths: {}", result.strengths.join(", "));

    println!("\nCareer ideas");
    for c in &result.career_recommendations {
        println!("  {} ({}% match)", c.title, c.match_percentage);
        println!("    Why: {}", c.why_it_matches);
        println!("    Path: {}", c.suggested_path);
    }

    println!("\n{}", result.encouraging_summary);
    println!("\nStrategic direction: {}", result.strategic_direction);
    println!("\nFor counselors: {}", result.counselor_summary);
    println!("\nParent action plan");
    for step in &result.parent_action_plan {
        println!("  - {step}");
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let backend = HttpAnalysisClient::new(config.api_base_url);
    let store = FileResultStore::in_dir(".");
    let mut wizard = Wizard::new(&store);
    let mut term = Terminal {
        input: io::stdin().lock(),
    };

    loop {
        match wizard.screen() {
            Screen::Landing => {
                println!("\nPsycheGuide: discover your strengths and career direction");
                println!("  1) Start assessment");
                println!("  2) How it works");
                println!("  3) Methodology");
                let has_previous = wizard.previous_result().is_some();
                if has_previous {
                    println!("  4) View previous result");
                }
                println!("  0) Quit");
                match term.prompt("Choose")?.as_str() {
                    "1" => wizard.start()?,
                    "2" => wizard.show_how_it_works()?,
                    "3" => wizard.show_methodology()?,
                    "4" if has_previous => {
                        wizard.view_previous_result()?;
                    }
                    "0" => return Ok(()),
                    _ => println!("Unknown option."),
                }
            }
            Screen::HowItWorks => {
                println!("\n{HOW_IT_WORKS}");
                term.prompt("Press Enter to go back")?;
                wizard.back()?;
            }
            Screen::Methodology => {
                println!("\n{METHODOLOGY}");
                term.prompt("Press Enter to go back")?;
                wizard.back()?;
            }
            Screen::Form => {
                println!("\nTell us about yourself");
                let info = StudentInfo {
                    name: term.prompt("Full name")?,
                    age: term.prompt("Age")?,
                    grade: term.prompt("Grade / level")?,
                    favorite_subjects: term.prompt("Favorite subjects (comma-separated)")?,
                };
                wizard.submit_profile(info)?;
            }
            Screen::Assessment => {
                if let Some(error) = wizard.error() {
                    println!("\n{error}");
                }
                for (n, question) in QUESTIONS.iter().enumerate() {
                    let answered = wizard
                        .responses()
                        .iter()
                        .any(|r| r.question_id == question.id);
                    if answered {
                        continue;
                    }
                    println!(
                        "\nSection: {:?}  Question {} of {}",
                        question.category,
                        n + 1,
                        QUESTIONS.len()
                    );
                    println!("{}", question.text);
                    for (i, option) in question.options.iter().enumerate() {
                        println!("  {}) {option}", i + 1);
                    }
                    let choice = term.choose("Your answer", question.options.len())?;
                    wizard.answer(question.id, choice)?;
                }

                println!("\nAnalyzing your profile...");
                if let Err(e) = wizard.finish(&backend, &store).await {
                    tracing::debug!("Finish failed: {e}");
                    term.prompt("Press Enter to try again")
                        .context("waiting for retry")?;
                }
            }
            Screen::Analyzing => unreachable!("analysis runs inside finish()"),
            Screen::Results => {
                if let Some(result) = wizard.result() {
                    print_report(result);
                }
                term.prompt("Press Enter to start over")?;
                wizard.restart()?;
            }
        }
    }
}
