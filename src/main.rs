use tracing::error;
use u_drdom::aco::AcoConfig;
use u_drdom::drd::DoubleRomanDomination;
use u_drdom::ga::GaConfig;
use u_drdom::graph::Graph;
use u_drdom::heuristics::Heuristic;
use u_drdom::random::rng_from_option;

enum Source {
    File(String),
    Random { order: usize, probability: f64 },
}

fn main() {
    init_tracing();

    let mut source: Option<Source> = None;
    let mut directed = false;
    let mut ga = GaConfig::default();
    let mut aco = AcoConfig::default();
    let mut heuristic: Option<Heuristic> = None;
    let mut seed: Option<u64> = None;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--graph" => {
                let path = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                source = Some(Source::File(path.clone()));
                i += 2;
            }
            "--random" => {
                let n = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
                let p = args.get(i + 2).unwrap_or_else(|| usage_and_exit(2));
                source = Some(Source::Random {
                    order: n.parse().unwrap_or_else(|_| usage_and_exit(2)),
                    probability: p.parse().unwrap_or_else(|_| usage_and_exit(2)),
                });
                i += 3;
            }
            "--directed" => {
                directed = true;
                i += 1;
            }
            "--population" => {
                ga.population_size = parse_value(&args, i);
                i += 2;
            }
            "--generations" => {
                ga.max_generations = parse_value(&args, i);
                i += 2;
            }
            "--ants" => {
                aco.ant_count = parse_value(&args, i);
                i += 2;
            }
            "--iterations" => {
                aco.iterations = parse_value(&args, i);
                i += 2;
            }
            "--heuristic" => {
                let id: u8 = parse_value(&args, i);
                heuristic = Some(Heuristic::from_id(id).unwrap_or_else(|e| {
                    eprintln!("{e}");
                    usage_and_exit(2)
                }));
                i += 2;
            }
            "--seed" => {
                seed = Some(parse_value(&args, i));
                i += 2;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    let Some(source) = source else {
        usage_and_exit(2)
    };

    let graph = match source {
        Source::File(path) => Graph::from_path(&path, directed),
        Source::Random { order, probability } => {
            let mut rng = rng_from_option(seed);
            Graph::random(order, directed, probability, &mut rng)
        }
    };
    let graph = graph.unwrap_or_else(|e| {
        error!("cannot build graph: {e}");
        std::process::exit(1)
    });

    if let Some(s) = seed {
        ga.seed = Some(s);
        aco.seed = Some(s.wrapping_add(1));
    }

    let mut drd = DoubleRomanDomination::new(&graph)
        .with_ga_config(ga)
        .with_aco_config(aco);
    if let Some(h) = heuristic {
        drd = drd.with_heuristic(h);
    }

    match drd.run() {
        Ok(both) => {
            println!("GA  weight: {}", both.genetic.weight);
            println!("GA  labels: {}", both.genetic.labeling);
            println!("ACO weight: {}", both.ant_colony.weight);
            println!("ACO labels: {}", both.ant_colony.labeling);
        }
        Err(e) => {
            error!("run failed: {e}");
            std::process::exit(1);
        }
    }
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize) -> T {
    let v = args.get(i + 1).unwrap_or_else(|| usage_and_exit(2));
    v.parse().unwrap_or_else(|_| usage_and_exit(2))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  u-drdom (--graph PATH | --random N P) [options]\n\nOptions:\n  --graph PATH         Read the graph from an edge-list file (header: order size)\n  --random N P         Random graph with N vertices and edge probability P\n  --directed           Treat the graph as directed\n  --population N       GA population size (default: 100)\n  --generations N      GA generations (default: 100)\n  --ants N             Ants per ACO iteration (default: 10)\n  --iterations N       ACO iterations (default: 50)\n  --heuristic 1|2|3    Construction heuristic seeding the GA population\n  --seed SEED          Deterministic seed (optional)\n\nLogging is controlled by RUST_LOG (default: info).\n"
    );
    std::process::exit(code)
}
