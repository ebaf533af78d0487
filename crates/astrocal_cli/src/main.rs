use astrocal_frames::{
    EARTH_RADIUS_KM, cartesian_to_spherical_vec, decimal_to_sexagesimal,
    degrees_to_radians_in_place, great_circle_distance, sexagesimal_to_decimal,
    sexagesimal_to_decimal_strict, spherical_degrees_to_radians, spherical_radians_to_degrees,
    spherical_to_cartesian_vec,
};
use astrocal_time::{
    DEFAULT_MSD_CORRECTION, Instant, current_instant, format_local, format_utc, instant_to_jd,
    instant_to_mjd, instant_to_seconds, jd_to_instant, jd_to_mjd, jd_to_msd, jd_to_msd_with,
    msd_to_jd_with, seconds_to_instant,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "astrocal", about = "Astronomical time and coordinate conversions")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current time in every supported scale
    Now,
    /// Unix seconds to Julian Date
    ToJd {
        /// Seconds since 1970-01-01T00:00:00 UTC
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
    },
    /// Julian Date to Unix time
    FromJd {
        /// Julian Date
        #[arg(allow_hyphen_values = true)]
        jd: f64,
    },
    /// Julian Date to Modified Julian Date
    Mjd {
        /// Julian Date
        #[arg(allow_hyphen_values = true)]
        jd: f64,
    },
    /// Julian Date to Mars Sol Date
    Msd {
        /// Julian Date
        #[arg(allow_hyphen_values = true)]
        jd: f64,
        /// Correction term in days
        #[arg(long, default_value_t = DEFAULT_MSD_CORRECTION, allow_hyphen_values = true)]
        k: f64,
    },
    /// Mars Sol Date to Julian Date
    MsdToJd {
        /// Mars Sol Date
        #[arg(allow_hyphen_values = true)]
        msd: f64,
        /// Correction term in days
        #[arg(long, default_value_t = DEFAULT_MSD_CORRECTION, allow_hyphen_values = true)]
        k: f64,
    },
    /// Convert decimal degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
    /// Convert DMS to decimal degrees
    Deg {
        #[arg(allow_hyphen_values = true)]
        degrees: i32,
        #[arg(allow_hyphen_values = true)]
        minutes: i32,
        #[arg(allow_hyphen_values = true)]
        seconds: f64,
        /// Reject minutes or seconds outside [0, 60)
        #[arg(long)]
        strict: bool,
    },
    /// Cartesian (x, y, z) to spherical (r, elevation, azimuth)
    ToSpherical {
        #[arg(allow_hyphen_values = true)]
        x: f64,
        #[arg(allow_hyphen_values = true)]
        y: f64,
        #[arg(allow_hyphen_values = true)]
        z: f64,
        /// Print angles in degrees
        #[arg(long)]
        degrees: bool,
    },
    /// Spherical (r, elevation, azimuth) to Cartesian (x, y, z)
    ToCartesian {
        #[arg(allow_hyphen_values = true)]
        r: f64,
        #[arg(allow_hyphen_values = true)]
        elevation: f64,
        #[arg(allow_hyphen_values = true)]
        azimuth: f64,
        /// Angles are given in degrees
        #[arg(long)]
        degrees: bool,
    },
    /// Great-circle distance between two lat/lon points
    Distance {
        #[arg(allow_hyphen_values = true)]
        lat1: f64,
        #[arg(allow_hyphen_values = true)]
        lon1: f64,
        #[arg(allow_hyphen_values = true)]
        lat2: f64,
        #[arg(allow_hyphen_values = true)]
        lon2: f64,
        /// Angles are given in degrees
        #[arg(long)]
        degrees: bool,
        /// Sphere radius (default: Earth equatorial radius in km)
        #[arg(long, default_value_t = EARTH_RADIUS_KM)]
        radius: f64,
    },
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

fn print_instant(t: Instant) {
    match (format_utc(t), format_local(t)) {
        (Ok(utc), Ok(local)) => {
            println!("UTC:   {utc}");
            println!("Local: {local}");
        }
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Now => {
            let now = current_instant().unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });
            let jd = instant_to_jd(now);
            print_instant(now);
            println!("Unix seconds: {:.9}", instant_to_seconds(now));
            println!("JD:  {jd:.8}");
            println!("MJD: {:.8}", instant_to_mjd(now));
            println!("MSD: {:.8}", jd_to_msd(jd));
        }

        Commands::ToJd { seconds } => {
            let t = seconds_to_instant(seconds);
            println!("JD: {:.8}", instant_to_jd(t));
        }

        Commands::FromJd { jd } => {
            let t = jd_to_instant(jd);
            print_instant(t);
            println!("Unix seconds: {:.6}", instant_to_seconds(t));
        }

        Commands::Mjd { jd } => {
            println!("MJD: {:.8}", jd_to_mjd(jd));
        }

        Commands::Msd { jd, k } => {
            println!("MSD: {:.8}", jd_to_msd_with(jd, k));
        }

        Commands::MsdToJd { msd, k } => {
            println!("JD: {:.8}", msd_to_jd_with(msd, k));
        }

        Commands::Dms { deg } => {
            let d = decimal_to_sexagesimal(deg);
            println!("{d}  ({} deg {} min {:.4} sec)", d.degrees, d.minutes, d.seconds);
        }

        Commands::Deg {
            degrees,
            minutes,
            seconds,
            strict,
        } => {
            if strict {
                match sexagesimal_to_decimal_strict(degrees, minutes, seconds) {
                    Ok(v) => println!("{v:.8} deg"),
                    Err(e) => {
                        eprintln!("{e}");
                        std::process::exit(1);
                    }
                }
            } else {
                let d = sexagesimal_to_decimal(degrees, minutes, seconds);
                println!("{:.8} deg", d.degrees);
                for w in &d.warnings {
                    eprintln!("warning: {w}");
                }
            }
        }

        Commands::ToSpherical { x, y, z, degrees } => {
            let mut p = cartesian_to_spherical_vec(&[x, y, z]);
            let unit = if degrees {
                spherical_radians_to_degrees(&mut p);
                "deg"
            } else {
                "rad"
            };
            println!(
                "r = {:.10}  elevation = {:.10} {unit}  azimuth = {:.10} {unit}",
                p[0], p[1], p[2]
            );
        }

        Commands::ToCartesian {
            r,
            elevation,
            azimuth,
            degrees,
        } => {
            let mut p = [r, elevation, azimuth];
            if degrees {
                spherical_degrees_to_radians(&mut p);
            }
            let xyz = spherical_to_cartesian_vec(&p);
            println!("x = {:.10}  y = {:.10}  z = {:.10}", xyz[0], xyz[1], xyz[2]);
        }

        Commands::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
            degrees,
            radius,
        } => {
            let mut angles = [lat1, lon1, lat2, lon2];
            if degrees {
                degrees_to_radians_in_place(&mut angles);
            }
            let [la1, lo1, la2, lo2] = angles;
            println!(
                "Distance: {:.6}",
                great_circle_distance(la1, lo1, la2, lo2, radius)
            );
        }
    }
}
