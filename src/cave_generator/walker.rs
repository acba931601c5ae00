use rand::Rng;

/// One of the four cardinal directions a walker can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Draws a uniformly random direction. Consumes exactly one `gen_range` draw.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Unit step in grid space; `y` grows downwards.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    pub position: (isize, isize),
    pub direction: Direction,
}

impl Walker {
    pub fn new(position: (isize, isize), direction: Direction) -> Self {
        Self { position, direction }
    }

    /// Moves one step and clamps each axis into `min..=max`.
    pub fn advance(&mut self, min: (isize, isize), max: (isize, isize)) {
        let (dx, dy) = self.direction.offset();
        self.position.0 = (self.position.0 + dx).clamp(min.0, max.0);
        self.position.1 = (self.position.1 + dy).clamp(min.1, max.1);
    }
}

/// The live walkers. Its size never leaves `1..=max_walkers`.
#[derive(Debug, Clone)]
pub struct WalkerPool {
    walkers: Vec<Walker>,
    max_walkers: usize,
}

impl WalkerPool {
    pub fn new(first: Walker, max_walkers: usize) -> Self {
        Self { walkers: vec![first], max_walkers: max_walkers.max(1) }
    }

    pub fn len(&self) -> usize {
        self.walkers.len()
    }

    pub fn max_walkers(&self) -> usize {
        self.max_walkers
    }

    pub fn can_spawn(&self) -> bool {
        self.walkers.len() < self.max_walkers
    }

    pub fn can_remove(&self) -> bool {
        self.walkers.len() > 1
    }

    /// Appends a walker if the pool has room. Returns whether it was added.
    pub fn spawn(&mut self, walker: Walker) -> bool {
        if !self.can_spawn() {
            return false;
        }
        self.walkers.push(walker);
        true
    }

    /// Removes the walker at `index` unless it is the last one left.
    pub fn remove(&mut self, index: usize) -> Option<Walker> {
        if !self.can_remove() || index >= self.walkers.len() {
            return None;
        }
        Some(self.walkers.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Walker> {
        self.walkers.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Walker> {
        self.walkers.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Walker> {
        self.walkers.iter()
    }
}
