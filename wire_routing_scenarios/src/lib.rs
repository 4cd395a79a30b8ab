use csv::ReaderBuilder;
use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;
use wire_routing::{Anchor, Board, Direction, GridVector, RouteError};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("could not read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not list scenarios: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("could not parse scenario record: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed scenario header {0:?}, expected \"board <width> <height>\"")]
    Header(String),
    #[error("unknown record kind {0:?}")]
    UnknownKind(String),
    #[error("record of kind {0:?} is missing fields")]
    MissingField(String),
    #[error("no scenario named {0:?}")]
    UnknownScenario(String),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// One tab separated line of a `.scen` file. Obstacle records only fill in `x1` and `y1`.
#[derive(Debug, Deserialize)]
struct Record {
    kind: String,
    x1: i32,
    y1: i32,
    dx1: Option<i32>,
    dy1: Option<i32>,
    x2: Option<i32>,
    y2: Option<i32>,
    dx2: Option<i32>,
    dy2: Option<i32>,
    weight: Option<f64>,
}

impl Record {
    fn end(&self) -> Option<Anchor> {
        Some(Anchor::new(
            GridVector::new(self.x2?, self.y2?),
            GridVector::new(self.dx2?, self.dy2?),
        ))
    }

    fn start(&self) -> Option<Anchor> {
        Some(Anchor::new(
            GridVector::new(self.x1, self.y1),
            GridVector::new(self.dx1?, self.dy1?),
        ))
    }
}

pub fn scenario_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

fn parse_header(line: &str) -> Result<(usize, usize), ScenarioError> {
    let parts = line.split_whitespace().collect::<Vec<&str>>();
    match parts.as_slice() {
        ["board", w, h] => match (w.parse::<usize>(), h.parse::<usize>()) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(ScenarioError::Header(line.to_owned())),
        },
        _ => Err(ScenarioError::Header(line.to_owned())),
    }
}

/// Builds a [Board] from the contents of a `.scen` file: a `board <width> <height>` header
/// followed by `pair` and `obstacle` records.
pub fn parse_scenario(contents: &str) -> Result<Board, ScenarioError> {
    let (header, remaining_data) = contents.split_once('\n').unwrap_or((contents, ""));
    let (w, h) = parse_header(header.trim())?;
    let mut board = Board::new(w, h);

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_reader(remaining_data.as_bytes());
    for result in csv_reader.deserialize() {
        let record: Record = result?;
        match record.kind.as_str() {
            "pair" => {
                let missing = || ScenarioError::MissingField(record.kind.clone());
                let start = record.start().ok_or_else(missing)?;
                let end = record.end().ok_or_else(missing)?;
                let id = board.add_pair(start, end)?;
                if let Some(weight) = record.weight {
                    board.set_weight(id, weight)?;
                }
            }
            "obstacle" => {
                board.set_occupied(GridVector::new(record.x1, record.y1), true)?;
            }
            other => return Err(ScenarioError::UnknownKind(other.to_owned())),
        }
    }
    Ok(board)
}

pub fn load_scenario(path: &Path) -> Result<Board, ScenarioError> {
    let contents = fs::read_to_string(path)?;
    parse_scenario(&contents)
}

/// Names of all fixture scenarios, sorted.
pub fn get_scenario_names() -> Result<Vec<String>, ScenarioError> {
    let root = scenario_dir();
    let mut names = Vec::new();
    for entry in WalkDir::new(&root) {
        let entry = entry?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "scen") {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_owned());
            }
        }
    }
    names.sort();
    Ok(names)
}

pub fn get_scenario(name: &str) -> Result<Board, ScenarioError> {
    if get_scenario_names()?.iter().any(|n| n == name) {
        load_scenario(&scenario_dir().join(format!("{name}.scen")))
    } else {
        Err(ScenarioError::UnknownScenario(name.to_owned()))
    }
}

fn random_point<R: Rng>(width: usize, height: usize, rng: &mut R) -> GridVector {
    GridVector::new(
        rng.gen_range(0..width) as i32,
        rng.gen_range(0..height) as i32,
    )
}

fn random_anchor<R: Rng>(width: usize, height: usize, rng: &mut R) -> Anchor {
    const FACINGS: [Direction; 4] = [
        Direction::EAST,
        Direction::NORTH,
        Direction::WEST,
        Direction::SOUTH,
    ];
    let facing = FACINGS[rng.gen_range(0..FACINGS.len())];
    Anchor::new(random_point(width, height, rng), GridVector::from(facing))
}

/// A board with 2 to 4 pairs between random cells, each anchor facing a random orthogonal
/// direction. Anchors may coincide.
pub fn random_board<R: Rng>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Board, ScenarioError> {
    let mut board = Board::new(width, height);
    let count = rng.gen_range(2..5);
    for _ in 0..count {
        let start = random_anchor(width, height, rng);
        let end = random_anchor(width, height, rng);
        board.add_pair(start, end)?;
    }
    Ok(board)
}

/// Places obstacles on free cells with the given probability per cell.
pub fn scatter_obstacles<R: Rng>(
    board: &mut Board,
    density: f64,
    rng: &mut R,
) -> Result<usize, ScenarioError> {
    let mut placed = 0;
    for x in 0..board.width() as i32 {
        for y in 0..board.height() as i32 {
            if rng.gen_bool(density) && board.set_occupied(GridVector::new(x, y), true)? {
                placed += 1;
            }
        }
    }
    Ok(placed)
}
