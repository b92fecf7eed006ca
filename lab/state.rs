use neuromat::{MatrixField, Workspace};

/// State owned by the lab server: the reactive workspace plus one text
/// field per editable matrix. Fields mirror the workspace — whenever the
/// workspace rebuilds W/V or changes size, the fields are resynced here.
pub struct LabState {
    pub workspace: Workspace,
    pub vector_field: MatrixField,
    pub w_field: MatrixField,
    pub v_field: MatrixField,
}

/// One decoded `POST /update` submission.
#[derive(Debug, Default)]
pub struct UpdateForm {
    /// `None` when the submitted size was missing or unparseable; the
    /// current size is then left unchanged.
    pub size: Option<usize>,
    pub auto_fill: bool,
    pub vector_text: String,
    pub w_text: String,
    pub v_text: String,
}

impl LabState {
    pub fn new() -> Self {
        let workspace = Workspace::new();
        let size = workspace.size;
        let vector_field = MatrixField::new(size, 1);
        let mut w_field = MatrixField::new(size, size);
        let mut v_field = MatrixField::new(size, size);
        w_field.accept(&workspace.w);
        v_field.accept(&workspace.v);
        LabState { workspace, vector_field, w_field, v_field }
    }

    /// Applies one form submission in order: auto toggle, then size change
    /// (each rebuilds W/V and resyncs the fields), then field commits.
    ///
    /// A field counts as blurred when its submitted text differs from the
    /// stored text. W/V texts are ignored in a request that rebuilt the
    /// weights — those texts predate the rebuild — and while auto-fill is
    /// on (the textareas are read-only then).
    pub fn apply_update(&mut self, form: &UpdateForm) {
        let mut rebuilt = false;

        if form.auto_fill != self.workspace.auto_fill {
            self.workspace.set_auto_fill(form.auto_fill);
            rebuilt = true;
        }

        if let Some(size) = form.size {
            if size != self.workspace.size {
                self.workspace.set_size(size);
                self.resync_shapes();
                rebuilt = true;
            }
        }

        if rebuilt {
            self.w_field.accept(&self.workspace.w);
            self.v_field.accept(&self.workspace.v);
        }

        if form.vector_text != self.vector_field.text {
            match self.vector_field.commit(&form.vector_text) {
                Ok(matrix) => {
                    log::debug!("vector committed ({} rows)", matrix.rows);
                    self.workspace.set_vector(matrix);
                }
                Err(err) => log::debug!("vector text rejected: {}", err),
            }
        }

        if !rebuilt && !self.workspace.auto_fill {
            if form.w_text != self.w_field.text {
                match self.w_field.commit(&form.w_text) {
                    Ok(matrix) => {
                        log::debug!("W committed ({}x{})", matrix.rows, matrix.cols);
                        self.workspace.set_w(matrix);
                    }
                    Err(err) => log::debug!("W text rejected: {}", err),
                }
            }
            if form.v_text != self.v_field.text {
                match self.v_field.commit(&form.v_text) {
                    Ok(matrix) => {
                        log::debug!("V committed ({}x{})", matrix.rows, matrix.cols);
                        self.workspace.set_v(matrix);
                    }
                    Err(err) => log::debug!("V text rejected: {}", err),
                }
            }
        }
    }

    fn resync_shapes(&mut self) {
        let size = self.workspace.size;
        self.vector_field.set_dims(size, 1);
        self.w_field.set_dims(size, size);
        self.v_field.set_dims(size, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> UpdateForm {
        // A no-op submission reflecting the initial state.
        let state = LabState::new();
        UpdateForm {
            size: Some(state.workspace.size),
            auto_fill: state.workspace.auto_fill,
            vector_text: state.vector_field.text.clone(),
            w_text: state.w_field.text.clone(),
            v_text: state.v_field.text.clone(),
        }
    }

    #[test]
    fn noop_submission_changes_nothing() {
        let mut state = LabState::new();
        let w_before = state.workspace.w.clone();
        state.apply_update(&form());
        assert_eq!(state.workspace.size, 5);
        assert_eq!(state.workspace.w, w_before);
        assert!(!state.vector_field.touched);
    }

    #[test]
    fn vector_commit_drives_the_chain() {
        let mut state = LabState::new();
        let mut update = form();
        update.vector_text = "1\n2\n3\n4\n5".to_owned();
        state.apply_update(&update);

        assert_eq!(state.workspace.net1.len(), 5);
        assert!(state.vector_field.valid);
    }

    #[test]
    fn invalid_vector_is_flagged_and_chain_stays_empty() {
        let mut state = LabState::new();
        let mut update = form();
        update.vector_text = "1\nbad\n3\n4\n5".to_owned();
        state.apply_update(&update);

        assert!(state.vector_field.flagged());
        assert!(state.workspace.net1.is_empty());
    }

    #[test]
    fn size_change_rebuilds_weights_and_ignores_stale_wv_texts() {
        let mut state = LabState::new();
        let mut update = form();
        update.size = Some(3);
        // Stale 5x5 texts from the page that was just submitted.
        state.apply_update(&update);

        assert_eq!(state.workspace.size, 3);
        assert_eq!((state.workspace.w.rows, state.workspace.w.cols), (3, 3));
        assert_eq!(state.w_field.rows, 3);
        assert!(state.w_field.valid);
    }

    #[test]
    fn unparseable_size_leaves_size_unchanged() {
        let mut state = LabState::new();
        let mut update = form();
        update.size = None;
        state.apply_update(&update);
        assert_eq!(state.workspace.size, 5);
    }

    #[test]
    fn auto_off_then_manual_weights() {
        let mut state = LabState::new();

        let mut update = form();
        update.auto_fill = false;
        state.apply_update(&update);
        assert!(state.workspace.w.data.iter().flatten().all(|&x| x == 0.0));

        // Next request: edit W by hand.
        let mut update = UpdateForm {
            size: Some(5),
            auto_fill: false,
            vector_text: state.vector_field.text.clone(),
            w_text: state.w_field.text.clone(),
            v_text: state.v_field.text.clone(),
        };
        update.w_text = update.w_text.replace("0 0 0 0 0", "1 1 1 1 1");
        state.apply_update(&update);
        assert_eq!(state.workspace.w.data[0], vec![1.0; 5]);
    }

    #[test]
    fn wv_edits_are_ignored_while_auto_fill_is_on() {
        let mut state = LabState::new();
        let mut update = form();
        update.w_text = "9 9 9 9 9\n".repeat(5).trim_end().to_owned();
        state.apply_update(&update);
        assert!(state.workspace.w.data.iter().flatten().all(|&x| x == 0.2));
    }
}
