// src/config/state.rs
use super::options::DashboardOptions;

/// Per-window view selections. Views never write anything else.
#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Company Detail -> index into the entity list
    pub detail_entity: usize,

    /// Compare Companies -> selected entity indices, in click order
    pub compare_selected: Vec<usize>,

    /// Anchor for shift-click range selection in the entity panel
    pub last_clicked: Option<usize>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            detail_entity: 0,
            compare_selected: Vec::new(),
            last_clicked: None,
            window_w: 1280,
            window_h: 800,
        }
    }
}

impl GuiState {
    /// Fresh state for a dataset with `entities` columns.
    pub fn for_entities(entities: usize, options: &DashboardOptions) -> Self {
        Self {
            compare_selected: (0..entities.min(options.compare_default)).collect(),
            ..Self::default()
        }
    }

    /// Apply one click on entity `idx` to the compare selection.
    ///
    /// Plain click selects only `idx`; ctrl toggles it; shift selects the range
    /// from the last click; ctrl+shift adds that range to the selection.
    pub fn click_compare(&mut self, idx: usize, ctrl: bool, shift: bool) {
        let sel = &mut self.compare_selected;
        let range = self
            .last_clicked
            .map(|last| if last <= idx { last..=idx } else { idx..=last });

        match (ctrl, shift, range) {
            (true, true, Some(r)) => {
                for j in r {
                    if !sel.contains(&j) { sel.push(j); }
                }
            }
            (true, _, _) => {
                if sel.contains(&idx) { sel.retain(|x| *x != idx); } else { sel.push(idx); }
            }
            (false, true, Some(r)) => {
                sel.clear();
                sel.extend(r);
            }
            _ => {
                // No anchor: behave like single click
                sel.clear();
                sel.push(idx);
            }
        }
        self.last_clicked = Some(idx);
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: DashboardOptions,
    pub gui: GuiState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_clicks_follow_modifier_rules() {
        let mut g = GuiState::default();
        g.click_compare(2, false, false);
        assert_eq!(g.compare_selected, vec![2]);

        g.click_compare(4, false, true);
        assert_eq!(g.compare_selected, vec![2, 3, 4]);

        g.click_compare(3, true, false);
        assert_eq!(g.compare_selected, vec![2, 4]);

        g.click_compare(0, true, true);
        assert_eq!(g.compare_selected, vec![2, 4, 0, 1, 3]);
    }

    #[test]
    fn default_compare_selection_is_capped_by_entity_count() {
        let opts = DashboardOptions::default();
        assert_eq!(GuiState::for_entities(10, &opts).compare_selected, vec![0, 1, 2]);
        assert_eq!(GuiState::for_entities(2, &opts).compare_selected, vec![0, 1]);
    }
}
