//! The A* search loop, per-search recompute and path reconstruction.

use log::{debug, warn};

use crate::distance::euclidean;
use crate::pathfinder::{OpenEntry, Pathfinder, SearchOutcome};
use crate::table::{NO_PARENT, NodeState};

impl Pathfinder {
    /// Recompute the path between the configured endpoints.
    ///
    /// Runs the full search to completion; there is no suspension point.
    pub(crate) fn update_path(&mut self) -> SearchOutcome {
        let (Some(start), Some(goal)) = (self.start(), self.end()) else {
            debug!("pathfinder: start/end not both set, skipping search");
            return SearchOutcome::InvalidPosition;
        };
        let (Some(start_idx), Some(goal_idx)) = (self.table.idx(start), self.table.idx(goal))
        else {
            warn!(
                "pathfinder: endpoint outside the {w}x{w} grid (start {start}, end {goal})",
                w = self.table.width()
            );
            return SearchOutcome::InvalidPosition;
        };

        // The goal may have moved, invalidating every cached heuristic.
        // Stale parent links must not survive into the next
        // reconstruction, so reset all per-search state here.
        let cell_size = self.cell_size();
        for node in self.table.nodes.iter_mut() {
            node.parent = NO_PARENT;
            node.state = NodeState::Unseen;
            if node.passable() {
                node.heuristic = euclidean(node.pos, goal) * cell_size;
                node.total = node.base + node.heuristic;
            } else {
                node.heuristic = 0.0;
                node.total = 0.0;
            }
        }

        self.open.clear();
        self.seq = 0;
        self.table.nodes[start_idx].total = 0.0;
        self.table.nodes[start_idx].state = NodeState::Open;
        self.push_open(start_idx, 0.0);

        loop {
            let Some(entry) = self.open.pop() else {
                debug!("pathfinder: no path from {start} to {goal}");
                self.path.clear();
                return SearchOutcome::NoPath;
            };
            let ci = entry.idx;
            // Stale duplicate left behind by a relaxation.
            if self.table.nodes[ci].state != NodeState::Open {
                continue;
            }
            if ci == goal_idx {
                self.rebuild_path(goal_idx);
                return SearchOutcome::Found;
            }

            let cur_pos = self.table.nodes[ci].pos;
            let cur_total = self.table.nodes[ci].total;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let Some(ni) = self.table.idx(cur_pos.shift(dx, dy)) else {
                        continue;
                    };
                    // Stepping next to the goal ends the search at once,
                    // before the usual passability and relaxation rules.
                    if ni == goal_idx {
                        let node = &mut self.table.nodes[ni];
                        node.parent = ci;
                        node.total = cur_total + node.base;
                        self.rebuild_path(goal_idx);
                        return SearchOutcome::Found;
                    }

                    let state = self.table.nodes[ni].state;
                    if !self.table.nodes[ni].passable() || state == NodeState::Closed {
                        continue;
                    }
                    if state == NodeState::Open {
                        let through = cur_total + self.table.nodes[ni].base;
                        if self.table.nodes[ni].total > through {
                            let node = &mut self.table.nodes[ni];
                            node.total = through;
                            node.parent = ci;
                            self.push_open(ni, through);
                        }
                    } else {
                        // Unseen: keep the optimistic estimate from the
                        // recompute pass as its priority.
                        let node = &mut self.table.nodes[ni];
                        node.parent = ci;
                        node.state = NodeState::Open;
                        let f = node.total;
                        self.push_open(ni, f);
                    }
                }
            }

            self.table.nodes[ci].state = NodeState::Closed;
        }
    }

    fn push_open(&mut self, idx: usize, f: f32) {
        self.open.push(OpenEntry {
            f,
            seq: self.seq,
            idx,
        });
        self.seq += 1;
    }

    /// Rebuild the path by walking parent links back from the goal.
    ///
    /// The goal is included, the start (the one node with no parent) is
    /// not, so the result reads goal→start.
    fn rebuild_path(&mut self, goal_idx: usize) {
        self.path.clear();
        let mut ci = goal_idx;
        while self.table.nodes[ci].parent != NO_PARENT {
            self.path.push(self.table.nodes[ci].pos);
            ci = self.table.nodes[ci].parent;
        }
        debug!("pathfinder: rebuilt path, {} cells", self.path.len());
    }
}
