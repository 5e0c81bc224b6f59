use argh::FromArgs;
use image::{ImageFormat, RgbImage};
use px565::RasterImage;
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
};

mod cgen;

/// `.px` icon converter: decode to PNG, batch-encode PNGs, or embed PNGs as C
/// source arrays.
#[derive(FromArgs)]
struct Cli {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Decode(Decode),
    Pack(Pack),
    Embed(Embed),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Cli { command } = argh::from_env();

    match command {
        Command::Decode(options) => decode(options),
        Command::Pack(options) => pack(options),
        Command::Embed(options) => embed(options),
    }
}

/// Decodes a `.px` file into a PNG.
#[derive(FromArgs)]
#[argh(subcommand, name = "decode")]
struct Decode {
    /// the input `.px` file
    #[argh(positional)]
    px_file: String,
    /// the output PNG file
    #[argh(positional)]
    png_file: String,
}

fn decode(options: Decode) -> Result<(), Box<dyn std::error::Error>> {
    let Decode { px_file, png_file } = options;

    let data = fs::read(&px_file)?;

    println!("Decoding `{px_file}`");

    let image = px565::decode::decode(&data)?;
    let (width, height) = (image.width(), image.height());

    RgbImage::from_vec(u32::from(width), u32::from(height), image.to_rgb888())
        .ok_or("failed to create image")?
        .save_with_format(&png_file, ImageFormat::Png)?;

    println!("Written {width}x{height} image to `{png_file}`");

    Ok(())
}

/// Encodes every PNG in a directory into a `.px` file of the same base name.
#[derive(FromArgs)]
#[argh(subcommand, name = "pack")]
struct Pack {
    /// the directory containing the source PNGs
    #[argh(positional)]
    png_directory: String,
    /// the directory receiving the `.px` files
    #[argh(positional)]
    output_directory: String,
}

fn pack(options: Pack) -> Result<(), Box<dyn std::error::Error>> {
    let Pack {
        png_directory,
        output_directory,
    } = options;

    for path in png_files_sorted(Path::new(&png_directory))? {
        let file_name = utf8_file_name(&path)?;
        println!("Converting {file_name}");

        let image = load_as_rgb565(&path)?;
        let out_path = Path::new(&output_directory).join(Path::new(file_name).with_extension("px"));
        fs::write(out_path, px565::encode::encode(&image))?;
    }

    Ok(())
}

/// Embeds every PNG in a directory as C source arrays plus a shared header.
#[derive(FromArgs)]
#[argh(subcommand, name = "embed")]
struct Embed {
    /// emit plain arrays instead of flash-resident (PROGMEM) ones
    #[argh(switch)]
    ram: bool,

    /// the directory containing the source PNGs
    #[argh(positional)]
    png_directory: String,
    /// the directory receiving the generated sources
    #[argh(positional)]
    output_directory: String,
}

fn embed(options: Embed) -> Result<(), Box<dyn std::error::Error>> {
    let Embed {
        ram,
        png_directory,
        output_directory,
    } = options;
    let output_directory = Path::new(&output_directory);
    let embed_readonly = !ram;

    let mut entries = Vec::new();
    for path in png_files_sorted(Path::new(&png_directory))? {
        let file_name = utf8_file_name(&path)?.to_owned();
        let var = match file_name.rsplit_once('.') {
            Some((stem, _)) => stem.to_owned(),
            None => file_name.clone(),
        };

        println!("Converting {file_name}");

        let image = load_as_rgb565(&path)?;
        let source = cgen::image_source(&file_name, &var, &image, embed_readonly);
        fs::write(output_directory.join(format!("{var}.c")), source)?;

        entries.push(cgen::Entry { file_name, var });
    }

    fs::write(
        output_directory.join(cgen::HEADER_NAME),
        cgen::header_file(&entries),
    )?;
    println!("Header file: {}", cgen::HEADER_NAME);

    Ok(())
}

/// The qualifying files of a batch run: regular files ending in `.png`
/// (case-sensitive), subdirectories skipped. Sorted by name, directory
/// enumeration order is not stable across platforms.
fn png_files_sorted(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let path = entry.path();
        if path.extension() == Some(OsStr::new("png")) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn utf8_file_name(path: &Path) -> Result<&str, Box<dyn std::error::Error>> {
    path.file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| format!("non-UTF-8 file name: `{}`", path.display()).into())
}

/// Loads a PNG and down-converts it to RGB565. The alpha channel, if any, is
/// dropped before conversion.
fn load_as_rgb565(path: &Path) -> Result<RasterImage, Box<dyn std::error::Error>> {
    let decoded =
        image::io::Reader::with_format(BufReader::new(File::open(path)?), ImageFormat::Png)
            .decode()?;

    let (width, height) = (decoded.width(), decoded.height());
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err("image dimensions are too large".into());
    }

    let rgb = decoded.into_rgb8();
    RasterImage::from_rgb888(width as u16, height as u16, rgb.as_raw())
        .ok_or_else(|| "failed to convert image".into())
}
