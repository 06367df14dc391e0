use {
  humansize::{file_size_opts as options, FileSize},
  log::info,
  poster_grid::{
    cli::{parse_args, Args, Command, USAGE},
    error::{self, Context, Result},
    sketch::PosterGrid
  }
};

fn run(args: Args) -> Result<()> {
  let config = args.poster_config()?;
  let mut poster = PosterGrid::new(config, args.provider())?;
  let report = args.frame_loop().run(&mut poster, args.controls())?;

  report.image.save(&args.out)
    .with_context(|| format!("saving {}", args.out.display()))?;
  let bytes = std::fs::metadata(&args.out)
    .with_context(|| format!("reading {}", args.out.display()))?
    .len();
  info!("{}x{} poster written to {} ({})",
    report.image.width(), report.image.height(), args.out.display(),
    bytes.file_size(options::CONVENTIONAL).unwrap_or_else(|_| format!("{} B", bytes)));

  if args.open {
    open::that(&args.out)
      .with_context(|| format!("opening {}", args.out.display()))?;
  }
  Ok(())
}

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let result = parse_args(std::env::args().skip(1))
    .and_then(|command| match command {
      Command::Help => {
        println!("{}", USAGE);
        Ok(())
      }
      Command::Run(args) => run(args)
    });
  if let Err(e) = result {
    error::display(&e);
    std::process::exit(1);
  }
}
