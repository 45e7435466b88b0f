use std::process::exit;

use anyhow::Result;

use card_match::config::CONFIG;
use card_match::error::CardError;
use card_match::my_utils::io::read_reference_images;
use card_match::recognition::dataset::ReferenceLibrary;
use card_match::recognition::engine::Engine;

fn main() {
    match run() {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:#}");
            exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let mut args = std::env::args().skip(1);
    let query_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("usage: card_match <query-image>");
            return Ok(1);
        }
    };

    // 构建参照卡牌库
    let images = read_reference_images(&CONFIG.dataset.reference_dir)?;
    let library = ReferenceLibrary::from_images(images, &CONFIG.image_process);

    // 查询图在入口处解码, 解码失败属于整图级别错误
    let query = image::open(&query_path).map_err(|e| CardError::ImageDecode {
        path: query_path.clone(),
        source: e,
    })?;

    // debug构建时把中间图存到dev目录
    #[cfg(debug_assertions)]
    let engine = {
        use card_match::recognition::debug_view::SaveView;
        Engine::with_view(library, Box::new(SaveView::new("dev/debug")))
    };
    #[cfg(not(debug_assertions))]
    let engine = Engine::new(library);

    let output = engine.recognize(&query, CONFIG.region_locate.expected_cards)?;

    for card in output.cards.iter() {
        match (&card.result, &card.error) {
            (Some(result), _) => {
                println!(
                    "card {}: closest reference = {} (distance {})",
                    card.index, result.label, result.distance
                );
            }
            (None, Some(error)) => {
                eprintln!("card {}: {}", card.index, error);
            }
            (None, None) => {}
        }
    }

    Ok(if output.matched_count() > 0 { 0 } else { 1 })
}
