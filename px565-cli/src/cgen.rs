//! Generates the C source bundle for embedding icons in firmware: one `.c`
//! file of RGB565 words per image, plus one header declaring every symbol.
//!
//! The output is meant to be byte-stable so regenerated files diff cleanly:
//! inputs are processed in sorted order and the arrays wrap at a fixed column
//! count.

use itertools::Itertools;
use px565::RasterImage;

pub const HEADER_NAME: &str = "png_list.h";

const BANNER: &str = "/**\n * THIS FILE WAS AUTOMATICALLY GENERATED, DO NOT EDIT!\n */\n";
const GUARD: &str = "_PNG_FILE_LIST";

/// Hex words per array row.
const NCOLS: usize = 12;

/// One processed image: the source file name (kept for comments) and the C
/// identifier stem derived from it.
pub struct Entry {
    pub file_name: String,
    pub var: String,
}

/// Renders the `.c` file defining the width/height constants and the pixel
/// array for one image.
///
/// With `embed_readonly`, the symbols carry the `PROGMEM` flash-placement
/// attribute; without it the arrays are plain and the `<pgmspace.h>` include
/// is omitted.
pub fn image_source(
    file_name: &str,
    var: &str,
    image: &RasterImage,
    embed_readonly: bool,
) -> String {
    let qual = if embed_readonly { " PROGMEM" } else { "" };

    let mut out = String::from(BANNER);
    out.push('\n');
    out.push_str("#include <stdint.h>\n");
    if embed_readonly {
        out.push_str("#include <pgmspace.h>\n");
    }
    out.push('\n');

    out.push_str(&format!("/** {file_name} - RGB565 */\n"));
    out.push_str(&format!(
        "const int16_t _png_{var}_width{qual} = {};\n",
        image.width()
    ));
    out.push_str(&format!(
        "const int16_t _png_{var}_height{qual} = {};\n",
        image.height()
    ));
    out.push_str(&format!("const uint16_t _png_{var}[]{qual} = {{\n"));

    for row in &image.pixels().iter().chunks(NCOLS) {
        out.push('\t');
        out.push_str(
            &row.format_with("", |px, f| f(&format_args!("0x{px:04x},")))
                .to_string(),
        );
        out.push('\n');
    }
    out.push_str("};\n");

    out
}

/// Renders the shared header declaring the `extern` symbol triple of every
/// processed image.
pub fn header_file(entries: &[Entry]) -> String {
    let mut out = String::from(BANNER);
    out.push_str(&format!("#ifndef {GUARD}\n#define {GUARD}\n"));
    out.push_str("#include <stdint.h>\n");

    for Entry { file_name, var } in entries {
        out.push_str(&format!("\n/* {file_name} */\n"));
        out.push_str(&format!("extern const int16_t _png_{var}_width;\n"));
        out.push_str(&format!("extern const int16_t _png_{var}_height;\n"));
        out.push_str(&format!("extern const uint16_t _png_{var}[];\n"));
    }

    out.push_str(&format!("\n#endif /* {GUARD} */\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(width: u16, height: u16, pixels: Vec<u16>) -> RasterImage {
        RasterImage::from_rgb565(width, height, pixels).unwrap()
    }

    #[test]
    fn image_source_matches_expected_layout() {
        let image = raster(2, 1, vec![0xfc01, 0x0000]);
        let source = image_source("sun.png", "sun", &image, true);

        assert_eq!(
            source,
            "/**\n\
             \x20* THIS FILE WAS AUTOMATICALLY GENERATED, DO NOT EDIT!\n\
             \x20*/\n\
             \n\
             #include <stdint.h>\n\
             #include <pgmspace.h>\n\
             \n\
             /** sun.png - RGB565 */\n\
             const int16_t _png_sun_width PROGMEM = 2;\n\
             const int16_t _png_sun_height PROGMEM = 1;\n\
             const uint16_t _png_sun[] PROGMEM = {\n\
             \t0xfc01,0x0000,\n\
             };\n"
        );
    }

    #[test]
    fn ram_placement_drops_the_flash_attribute() {
        let image = raster(1, 1, vec![0x1234]);
        let source = image_source("dot.png", "dot", &image, false);

        assert!(!source.contains("PROGMEM"));
        assert!(!source.contains("pgmspace"));
        assert!(source.contains("const uint16_t _png_dot[] = {\n"));
    }

    #[test]
    fn arrays_wrap_at_twelve_words() {
        let image = raster(13, 1, vec![0x0001; 13]);
        let source = image_source("row.png", "row", &image, true);

        let body: Vec<&str> = source
            .lines()
            .filter(|line| line.starts_with('\t'))
            .collect();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0], format!("\t{}", "0x0001,".repeat(12)));
        assert_eq!(body[1], "\t0x0001,");
    }

    #[test]
    fn header_declares_one_triple_per_image() {
        let entries = vec![
            Entry {
                file_name: "moon.png".into(),
                var: "moon".into(),
            },
            Entry {
                file_name: "sun.png".into(),
                var: "sun".into(),
            },
        ];
        let header = header_file(&entries);

        assert!(header.starts_with(BANNER));
        assert!(header.contains("#ifndef _PNG_FILE_LIST\n#define _PNG_FILE_LIST\n"));
        assert!(header.ends_with("\n#endif /* _PNG_FILE_LIST */\n"));

        assert_eq!(header.matches("extern const").count(), 6);
        assert!(header.contains(
            "\n/* moon.png */\n\
             extern const int16_t _png_moon_width;\n\
             extern const int16_t _png_moon_height;\n\
             extern const uint16_t _png_moon[];\n"
        ));
    }
}
