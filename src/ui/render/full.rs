use crate::ui::model::Model;

pub fn render_full(m: &Model) -> String {
    let mut lines = m.render_header_block();
    lines.extend(m.render_main_content().lines().map(str::to_string));
    let first_line = crate::ui::render::modeline::render_modeline_padded(m)
        .lines()
        .next()
        .unwrap_or("")
        .to_string();
    lines.push(first_line);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use crate::product::Product;
    use regex::Regex;

    // helper to strip ANSI CSI sequences from rendered output for assertions
    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    fn stocked(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| {
                Product::new(
                    &format!("item{}", i + 1),
                    &format!("description {}", i + 1),
                    (i + 1) as f64,
                    "",
                    (i % 7) as u32,
                    i % 3 == 0,
                )
            })
            .collect()
    }

    #[test]
    fn render_full_matches_dimensions() {
        // sample sizes to validate behavior across different terminal shapes
        let sizes = [(80usize, 24usize), (100usize, 10usize), (40usize, 20usize)];

        for (w, h) in sizes.iter().cloned() {
            // populate 50 products so the viewport/pagination logic is exercised
            let mut m = crate::ui::initial_model(stocked(50));

            // simulate WindowSize message
            m.update(crate::ui::Msg::WindowSize {
                width: w,
                height: h,
            });

            // render the full view
            let out = m.render_full();

            // strip ANSI escape sequences so we can measure plain character dimensions
            let stripped = strip_ansi(&out);

            // collect lines and assert the rendered height matches requested height
            let lines: Vec<&str> = stripped.lines().collect();
            assert_eq!(
                lines.len(),
                h,
                "height mismatch for {}x{}: got {} lines\n<<output>>\n{}",
                w,
                h,
                lines.len(),
                stripped
            );

            // each line must have exactly `w` characters after stripping ANSI
            for (idx, line) in lines.iter().enumerate() {
                let lw = line.chars().count();
                assert_eq!(
                    lw, w,
                    "width mismatch at line {idx} for {w}x{h}: got {lw} chars\nline: `{line}`\n<<output>>\n{stripped}"
                );
            }
        }
    }

    #[test]
    fn grid_layout_keeps_dimensions() {
        let sizes = [(80usize, 24usize), (104usize, 12usize), (40usize, 16usize)];
        for (w, h) in sizes.iter().cloned() {
            let mut m = crate::ui::initial_model(stocked(50));
            m.update(crate::ui::Msg::WindowSize { width: w, height: h });
            m.update(crate::ui::Msg::ToggleLayout);
            let stripped = strip_ansi(&m.render_full());
            let lines: Vec<&str> = stripped.lines().collect();
            assert_eq!(lines.len(), h, "grid height mismatch for {w}x{h}");
            for (idx, line) in lines.iter().enumerate() {
                assert_eq!(
                    line.chars().count(),
                    w,
                    "grid width mismatch at line {idx} for {w}x{h}: `{line}`"
                );
            }
        }
    }

    #[test]
    fn modeline_is_last_line_and_exact_width() {
        let (w, h) = (80usize, 24usize);
        let mut m = crate::ui::initial_model(stocked(50));
        m.update(crate::ui::Msg::WindowSize {
            width: w,
            height: h,
        });
        let out = m.render_full();
        let stripped = strip_ansi(&out);
        let lines: Vec<&str> = stripped.lines().collect();
        assert!(!lines.is_empty(), "no lines rendered");
        let last = *lines.last().unwrap();
        assert_eq!(
            last.chars().count(),
            w,
            "modeline width mismatch: got {} expected {}\n<<output>>\n{}",
            last.chars().count(),
            w,
            stripped
        );
        let modeline = crate::ui::render_modeline_padded(&m);
        let modeline_stripped = strip_ansi(&modeline);
        let modeline_first = modeline_stripped.lines().next().unwrap_or("");
        assert_eq!(
            last, modeline_first,
            "modeline content mismatch:\n<<output>>\n{stripped}"
        );
    }

    #[test]
    fn header_box_first_three_lines() {
        let (w, h) = (80usize, 24usize);
        let mut m = crate::ui::initial_model(stocked(50));
        m.update(crate::ui::Msg::WindowSize {
            width: w,
            height: h,
        });
        let out = m.render_full();
        let stripped = strip_ansi(&out);
        let lines: Vec<&str> = stripped.lines().collect();
        assert!(lines.len() >= 3, "not enough lines to contain header box");
        let header_block = m.render_header_block();
        let helper_combined = header_block.join("\n");
        let helper_stripped = strip_ansi(&helper_combined);
        let helper_lines: Vec<&str> = helper_stripped.lines().collect();
        for i in 0..3 {
            assert_eq!(
                lines[i], helper_lines[i],
                "header box line {i} mismatch:\n<<output>>\n{stripped}"
            );
        }
    }

    #[test]
    fn main_content_fills_page_with_items() {
        let (w, h) = (30usize, 10usize);
        let mut m = crate::ui::initial_model(stocked(40));
        m.update(crate::ui::Msg::WindowSize {
            width: w,
            height: h,
        });
        let full = m.render_full();
        let stripped = strip_ansi(&full);
        let lines: Vec<&str> = stripped.lines().collect();
        assert_eq!(
            lines.len(),
            h,
            "full render height mismatch: got {} expected {}\n<<output>>\n{}",
            lines.len(),
            h,
            stripped
        );
        for (idx, line) in lines.iter().enumerate() {
            let lw = line.chars().count();
            assert_eq!(
                lw, w,
                "width mismatch at line {idx}: got {lw} expected {w}\nline: `{line}`\n<<output>>\n{stripped}"
            );
        }
        let modeline = crate::ui::render_modeline_padded(&m);
        let modeline_stripped = strip_ansi(&modeline);
        let total_pages = m.total_pages();
        let expect_pag = format!("Page 1/{total_pages}");
        assert!(
            modeline_stripped.contains(&expect_pag),
            "modeline does not show pagination\n<<output>>\n{full}"
        );
        let header_height = m.render_header_block().len();
        let middle: Vec<&str> = if lines.len() > header_height + 1 {
            lines[header_height..lines.len() - 1].to_vec()
        } else {
            Vec::new()
        };
        let expected_per = m.per_page;
        assert_eq!(
            middle.len(),
            expected_per,
            "main content page size mismatch: got {} expected {expected_per}\n<<output>>\n{stripped}",
            middle.len()
        );
        for (i, line) in middle.iter().enumerate().take(expected_per) {
            let expect = format!("item{}", i + 1);
            assert!(
                line.contains(&expect),
                "expected main content line {i} to contain `{expect}` but got `{line}`\n<<output>>\n{stripped}"
            );
        }
    }

    #[test]
    fn empty_list_renders_placeholder_within_frame() {
        let (w, h) = (80usize, 24usize);
        let mut m = crate::ui::initial_model(Vec::new());
        m.update(crate::ui::Msg::WindowSize { width: w, height: h });
        let stripped = strip_ansi(&m.render_full());
        let lines: Vec<&str> = stripped.lines().collect();
        assert_eq!(lines.len(), h);
        assert!(stripped.contains("Nothing on the shelf"));
        m.update(crate::ui::Msg::ToggleEmptyView);
        let stripped = strip_ansi(&m.render_full());
        assert!(stripped.contains("no products"));
    }
}
