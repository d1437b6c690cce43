use std::path::PathBuf;

use clap::{Parser, Subcommand};
use saju_base::{Gender, day_pillar, hour_pillar, year_pillar};
use saju_chart::{BirthInput, Chart, ChartAssembler, correct};
use saju_config::{DEFAULT_REGION_NAME, SajuConfig};
use saju_gateway::{KasiGateway, LunarDate};
use saju_solar::{classify, solar_position, term_boundaries};
use saju_time::{CalendarDate, CivilTime};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillar (사주) birth chart CLI")]
struct Cli {
    /// TOML config file (chart options, gateway, extra regions)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full birth chart
    Chart {
        /// Birth date (YYYY-MM-DD), solar unless --lunar
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24h civil time)
        #[arg(long)]
        time: CivilTime,
        /// male | female | 남 | 여
        #[arg(long)]
        gender: Gender,
        /// Treat --date as a lunar date
        #[arg(long)]
        lunar: bool,
        /// Lunar date is in an intercalary month
        #[arg(long, requires = "lunar")]
        leap_month: bool,
        /// Region name (unknown names fall back to Seoul)
        #[arg(long, default_value = DEFAULT_REGION_NAME)]
        region: String,
        /// Print JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Year pillar of a Gregorian year
    YearPillar {
        year: i32,
    },
    /// Day pillar of a date
    DayPillar {
        /// Date (YYYY-MM-DD)
        date: CalendarDate,
    },
    /// Hour pillar for a date and hour
    HourPillar {
        /// Date (YYYY-MM-DD)
        date: CalendarDate,
        /// Hour 0-23
        hour: u32,
    },
    /// True solar longitude
    SolarLongitude {
        /// Date (YYYY-MM-DD)
        date: CalendarDate,
        /// Fractional hour of day
        #[arg(long, default_value = "12.0")]
        hour: f64,
    },
    /// Boundary dates of the 12 sectional solar terms in a year
    SolarTerms {
        year: i32,
    },
    /// Solar month (1-12) of a date
    Classify {
        /// Date (YYYY-MM-DD)
        date: CalendarDate,
    },
    /// Longitude-corrected birth time
    Correct {
        /// Date (YYYY-MM-DD)
        date: CalendarDate,
        /// Time (HH:MM)
        time: CivilTime,
        #[arg(long, default_value = DEFAULT_REGION_NAME)]
        region: String,
    },
    /// List known regions
    Regions,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn load_config(path: Option<&PathBuf>) -> SajuConfig {
    match path {
        Some(p) => SajuConfig::load(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }),
        None => SajuConfig::default(),
    }
}

fn parse_date(s: &str) -> CalendarDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid date: {e}");
        std::process::exit(1);
    })
}

/// Lunar dates can have a 30th day in any month, so `--date` is only
/// parsed once `--lunar` is known.
fn parse_lunar_date(s: &str, leap_month: bool) -> LunarDate {
    let date: LunarDate = s.parse().unwrap_or_else(|e| {
        eprintln!("Invalid lunar date: {e}");
        std::process::exit(1);
    });
    LunarDate { leap_month, ..date }
}

fn print_chart(chart: &Chart) {
    let c = &chart.corrected.correction;
    println!(
        "Input:      {}-{:02}-{:02} {} ({}) {} {}",
        chart.input.year,
        chart.input.month,
        chart.input.day,
        chart.input.time,
        if chart.input.is_lunar() { "음력" } else { "양력" },
        chart.input.gender,
        chart.input.region
    );
    println!(
        "Corrected:  {} {} ({:+} min, meridian {}°E{}, region {} {:.4}°E)",
        c.date,
        c.time,
        c.offset_minutes,
        c.reference_meridian_deg,
        if c.special_period { ", special period" } else { "" },
        chart.corrected.region.name,
        c.region_longitude_deg
    );
    if let Some(lunar) = chart.lunar_equivalent {
        println!("Lunar:      {lunar}");
    }
    println!("Solar month: {}", chart.solar_month);
    println!();
    println!("        시주  일주  월주  년주");
    let p = &chart.pillars;
    println!(
        "Pillar  {}  {}  {}  {}",
        p.hour.hanja(),
        p.day.hanja(),
        p.month.hanja(),
        p.year.hanja()
    );
    println!("        {}  {}  {}  {}", p.hour, p.day, p.month, p.year);
    let [year, month, day, hour] = chart.twelve_stages.labels();
    println!("Stage   {hour}  {day}  {month}  {year}");
    println!();
    println!(
        "Day master: {} ({}, {})",
        chart.day_master,
        chart.day_master.hanja(),
        chart.day_master.element().name()
    );
    let tally: Vec<String> = chart
        .elements
        .entries()
        .iter()
        .map(|(e, n)| format!("{}({}) {n}", e.name(), e.hanja()))
        .collect();
    println!("Elements:   {}", tally.join(", "));
    println!();
    println!("Major fortune ({:?}):", chart.fortune_direction);
    for e in &chart.major_fortune {
        println!(
            "  age {:>3}  {}  {}-{}",
            e.start_age, e.pillar, e.start_year, e.end_year
        );
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    let regions = config.region_table();

    match cli.command {
        Commands::Chart {
            date,
            time,
            gender,
            lunar,
            leap_month,
            region,
            json,
        } => {
            let input = if lunar {
                BirthInput::lunar(parse_lunar_date(&date, leap_month), time, gender, region)
            } else {
                BirthInput::solar(parse_date(&date), time, gender, region)
            };

            // Solar charts use the gateway only to show the lunar date.
            let gateway = match KasiGateway::from_config(&config.gateway) {
                Ok(g) => Some(g),
                Err(e) => {
                    if lunar {
                        warn!("calendar gateway unavailable: {e}");
                    } else {
                        debug!("no lunar lookup: {e}");
                    }
                    None
                }
            };

            let mut assembler = ChartAssembler::new(&regions).with_options(config.chart.clone());
            if let Some(g) = gateway.as_ref() {
                assembler = assembler.with_gateway(g);
            }
            let chart = assembler.assemble(&input).unwrap_or_else(|e| {
                eprintln!("Chart failed: {e}");
                std::process::exit(1);
            });
            debug!("chart assembled for {}", chart.corrected.date());

            if json {
                match serde_json::to_string_pretty(&chart) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("JSON encoding failed: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_chart(&chart);
            }
        }

        Commands::YearPillar { year } => {
            let p = year_pillar(year);
            println!("{p} ({}) - {}띠", p.hanja(), p.branch.animal());
        }

        Commands::DayPillar { date } => {
            let p = day_pillar(date);
            println!("{p} ({})", p.hanja());
        }

        Commands::HourPillar { date, hour } => {
            let day = day_pillar(date);
            match hour_pillar(day.stem, hour) {
                Ok(p) => println!("{p} ({}) - day {day}", p.hanja()),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::SolarLongitude { date, hour } => {
            let pos = solar_position(date, hour);
            println!("JD:                  {:.5}", pos.jd);
            println!("T (centuries):       {:.10}", pos.t);
            println!("Mean longitude:      {:.6} deg", pos.mean_longitude_deg);
            println!("Mean anomaly:        {:.6} deg", pos.mean_anomaly_deg);
            println!("Eccentricity:        {:.9}", pos.eccentricity);
            println!("Equation of centre:  {:.6} deg", pos.equation_of_center_deg);
            println!("True longitude:      {:.6} deg", pos.true_longitude_deg);
        }

        Commands::SolarTerms { year } => {
            for (term, date) in term_boundaries(year) {
                println!(
                    "{:>2}  {} ({})  {:>5.1} deg  {date}",
                    term.month_index(),
                    term.name(),
                    term.hanja(),
                    term.longitude_deg()
                );
            }
        }

        Commands::Classify { date } => match classify(date) {
            Ok(m) => println!("{m}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },

        Commands::Correct { date, time, region } => {
            let r = regions.lookup(&region);
            let c = correct(date, time, r);
            println!(
                "{} {} ({:+} min, meridian {}°E{}, {} {:.4}°E)",
                c.date,
                c.time,
                c.offset_minutes,
                c.reference_meridian_deg,
                if c.special_period { ", special period" } else { "" },
                r.name,
                c.region_longitude_deg
            );
        }

        Commands::Regions => {
            for r in regions.iter() {
                let marker = if r.name == regions.default_region().name { " *" } else { "" };
                println!("{:.4}\t{:.4}\t{}{marker}", r.longitude, r.latitude, r.name);
            }
        }
    }
}
