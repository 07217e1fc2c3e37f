#![deny(clippy::all)]

use clap::{App, Arg};
use pbr_shade::brdf::{DiffuseModel, DistributionModel, GeometryModel};
use pbr_shade::{ShadingConfig, ShadingJob};
use std::path::Path;
use std::process;
use std::time::Instant;

fn parse_policy<T: serde::de::DeserializeOwned>(name: &str, value: &str) -> T {
    serde_json::from_value(serde_json::Value::String(value.to_string())).unwrap_or_else(|_| {
        eprintln!("unknown {} model: {}", name, value);
        process::exit(2);
    })
}

fn apply_overrides(config: &mut ShadingConfig, matches: &clap::ArgMatches<'_>) {
    if let Some(value) = matches.value_of("diffuse") {
        config.diffuse = parse_policy::<DiffuseModel>("diffuse", value);
    }
    if let Some(value) = matches.value_of("geometry") {
        config.geometry = parse_policy::<GeometryModel>("geometry", value);
    }
    if let Some(value) = matches.value_of("distribution") {
        config.distribution = parse_policy::<DistributionModel>("distribution", value);
    }
    if matches.is_present("attenuate") {
        config.attenuate = true;
    }
}

fn main() {
    env_logger::init();

    let matches = App::new("pbr-shade")
        .about("Evaluates physically based shading samples")
        .arg(
            Arg::with_name("job")
                .index(1)
                .required(true)
                .takes_value(true)
                .help("shading job as a json file"),
        )
        .arg(
            Arg::with_name("diffuse")
                .long("diffuse")
                .takes_value(true)
                .possible_values(&["lambertian", "disney", "burley"])
                .help("Override the diffuse model"),
        )
        .arg(
            Arg::with_name("geometry")
                .long("geometry")
                .takes_value(true)
                .possible_values(&["legacy_k", "smith_exact", "smith_fast"])
                .help("Override the visibility model"),
        )
        .arg(
            Arg::with_name("distribution")
                .long("distribution")
                .takes_value(true)
                .possible_values(&["ggx", "ggx_cross"])
                .help("Override the distribution model"),
        )
        .arg(
            Arg::with_name("attenuate")
                .long("attenuate")
                .help("Enable distance attenuation"),
        )
        .get_matches();

    let job_path = Path::new(matches.value_of("job").unwrap());
    let mut job = ShadingJob::from_path(job_path).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    let mut config = *job.get_config();
    apply_overrides(&mut config, &matches);
    job.set_config(config);

    let now = Instant::now();
    let colors = job.run();
    log::info!(
        "Shaded {} samples with {:?} in {:.3?}",
        colors.len(),
        job.get_config(),
        now.elapsed()
    );

    for color in colors {
        println!("{} {} {} {}", color.x, color.y, color.z, color.w);
    }
}
