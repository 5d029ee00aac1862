use std::fmt;

/// One node of an explicit search tree.
///
/// A node records the move that led to it (None only at the root, where no
/// move has been examined yet), which side is to move *after* that move, an
/// evaluation, and the ordered children explored beneath it. Ownership is
/// strictly tree-shaped; traversal order is insertion order.
///
/// The tree imposes no invariant of its own on evaluations: the search
/// algorithm decides when a node's value is final. Both minimax players
/// finalize a node only after all (or, under pruning, all explored)
/// children exist; a half-computed extremum is never visible to a caller.
pub struct GameTree<M> {
    action: Option<M>,
    is_white_move: bool,
    evaluation: i32,
    children: Vec<GameTree<M>>,
}

impl<M> GameTree<M>
where
    M: Copy + PartialEq + fmt::Debug,
{
    pub fn new(action: Option<M>, is_white_move: bool) -> Self {
        GameTree {
            action,
            is_white_move,
            evaluation: 0,
            children: Vec::new(),
        }
    }

    /// The move that produced this node, or None at the root.
    pub fn action(&self) -> Option<M> {
        self.action
    }

    /// True if White is the side to move after this node's action.
    pub fn is_white_move(&self) -> bool {
        self.is_white_move
    }

    pub fn evaluation(&self) -> i32 {
        self.evaluation
    }

    pub fn set_evaluation(&mut self, evaluation: i32) {
        self.evaluation = evaluation;
    }

    pub fn children(&self) -> &[GameTree<M>] {
        &self.children
    }

    /// Appends a fully-formed child. The parent's evaluation is left alone;
    /// updating it is the caller's responsibility.
    pub fn add_child(&mut self, child: GameTree<M>) {
        self.children.push(child);
    }

    /// Linear scan for the child produced by the given move.
    pub fn find_child_by_action(&self, action: M) -> Option<&GameTree<M>> {
        self.children.iter().find(|c| c.action == Some(action))
    }

    /// The child with the extremal evaluation for the side to move at this
    /// node: maximum if White is to move, minimum otherwise. Ties go to the
    /// earliest child, so a pre-shuffled move order makes tie-breaking
    /// uniformly random.
    pub fn best_child(&self) -> Option<&GameTree<M>> {
        let mut best: Option<&GameTree<M>> = None;

        for child in &self.children {
            best = match best {
                None => Some(child),
                Some(incumbent) => {
                    let improves = if self.is_white_move {
                        child.evaluation > incumbent.evaluation
                    } else {
                        child.evaluation < incumbent.evaluation
                    };

                    if improves {
                        Some(child)
                    } else {
                        Some(incumbent)
                    }
                }
            };
        }

        best
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let turn_desc = if self.is_white_move {
            "White's move"
        } else {
            "Black's move"
        };

        writeln!(
            f,
            "{}{:?} -> {}, {}",
            "  ".repeat(depth),
            self.action,
            turn_desc,
            self.evaluation
        )?;

        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }

        Ok(())
    }
}

impl<M> fmt::Display for GameTree<M>
where
    M: Copy + PartialEq + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
