//! Dirty propagation across frames.

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use pretty_assertions::assert_eq;
    use trellis::{
        App, Expanse, Layout, Pane, Result, Size, TermBuf, Widget, widgets::Text,
    };

    #[test]
    fn round_trip_through_frames() -> Result<()> {
        let app = App::new();
        let root = app.set_root(Layout::row());
        let text = Arc::new(Text::new("one"));
        root.insert(Pane::new(text.clone()), Size::Weight(1))?;
        root.insert(Pane::new(Text::new("two")), Size::Weight(1))?;
        app.resize(Expanse::new(8, 1));

        let mut buf = TermBuf::new((8, 1));
        assert!(app.frame(&mut buf)?);
        assert_eq!(buf.lines(), vec!["one two "]);
        assert!(!root.is_dirty());
        assert!(!app.frame(&mut buf)?);

        // Setting identical content is not a change
        text.set_content("one");
        assert!(!root.is_dirty());

        text.set_content("uno");
        assert!(root.is_dirty());
        assert!(app.frame(&mut buf)?);
        assert_eq!(buf.lines(), vec!["uno two "]);
        assert!(!root.is_dirty());
        Ok(())
    }

    #[test]
    fn geometry_change_dirties() -> Result<()> {
        let root = Layout::row();
        root.insert(Pane::new(Text::new("a")), Size::Weight(1))?;
        root.set_rect(Expanse::new(4, 1).rect());
        root.clear_dirty_flags();

        root.set_rect(Expanse::new(4, 1).rect());
        assert!(!root.is_dirty());
        root.set_rect(Expanse::new(6, 1).rect());
        assert!(root.is_dirty());
        Ok(())
    }

    #[test]
    fn removal_forces_full_redraw() -> Result<()> {
        let app = App::new();
        let root = app.set_root(Layout::row());
        root.insert(Pane::new(Text::new("aa")), Size::Fixed(2))?;
        root.insert(Pane::new(Text::new("bb")), Size::Fixed(2))?;
        app.resize(Expanse::new(4, 1));
        let mut buf = TermBuf::new((4, 1));
        app.frame(&mut buf)?;
        assert_eq!(buf.lines(), vec!["aabb"]);

        root.remove(1);
        assert!(app.frame(&mut buf)?);
        assert_eq!(buf.lines(), vec!["aa  "]);
        Ok(())
    }

    #[test]
    fn concurrent_mutators() -> Result<()> {
        let root = Layout::row();
        let texts: Vec<Arc<Text>> = (0..4).map(|_| Arc::new(Text::new(""))).collect();
        for t in &texts {
            root.insert(Pane::new(t.clone()), Size::Weight(1))?;
        }
        root.clear_dirty_flags();

        let handles: Vec<_> = texts
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, t)| {
                thread::spawn(move || {
                    for n in 0..100 {
                        t.set_content(&format!("{i}:{n}"));
                    }
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().is_ok());
        }

        assert!(root.is_dirty());
        for (i, t) in texts.iter().enumerate() {
            assert_eq!(t.content(), format!("{i}:99"));
        }
        root.clear_dirty_flags();
        assert!(!root.is_dirty());
        Ok(())
    }
}
