use colorous::RED_BLUE;
use embheat::{
    EmbeddingRow, GridDims, HeatmapConfig, HeatmapError, HeatmapRenderer, StubRowSource,
};

fn row(filename: &str, embedding: Vec<f64>) -> EmbeddingRow {
    EmbeddingRow {
        filename: filename.into(),
        embedding,
    }
}

#[tokio::test]
async fn single_row_paints_scale_endpoints() {
    let rows = vec![row("a.jpg", vec![0.0, 1.0])];
    let mut renderer = HeatmapRenderer::new(StubRowSource::new(rows), &HeatmapConfig::default());
    renderer.load_and_render().await.unwrap();

    assert_eq!(
        renderer.grid(),
        Some(GridDims {
            rows: 1,
            columns: 2
        })
    );

    let frame = renderer.frame().expect("frame committed");
    assert_eq!((frame.width(), frame.height()), (2, 1));

    // Domain [1, 0]: value 0 lands at the blue end of RdBu, value 1 at
    // the red end.
    let blue = RED_BLUE.eval_continuous(1.0);
    let red = RED_BLUE.eval_continuous(0.0);
    assert_eq!(frame.get_pixel(0, 0).0, [blue.r, blue.g, blue.b, 255]);
    assert_eq!(frame.get_pixel(1, 0).0, [red.r, red.g, red.b, 255]);
}

#[tokio::test]
async fn sorted_variant_renders_different_frame() {
    let rows = vec![row("a.jpg", vec![1.0, 0.0]), row("b.jpg", vec![0.5, 0.25])];
    let mut renderer = HeatmapRenderer::new(StubRowSource::new(rows), &HeatmapConfig::default());

    renderer.load_and_render().await.unwrap();
    let plain = renderer.frame().unwrap().clone();

    renderer.set_sorted(true).await.unwrap();
    let sorted = renderer.frame().unwrap().clone();

    assert_eq!(plain.dimensions(), sorted.dimensions());
    assert_ne!(plain, sorted);
}

#[tokio::test]
async fn rendering_from_cache_is_deterministic() {
    let rows = vec![row("a.jpg", vec![0.3, 0.6, 0.9])];
    let mut renderer = HeatmapRenderer::new(StubRowSource::new(rows), &HeatmapConfig::default());

    renderer.load_and_render().await.unwrap();
    let first = renderer.frame().unwrap().clone();

    renderer.load_and_render().await.unwrap();
    let second = renderer.frame().unwrap().clone();

    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_dataset_is_a_validation_error() {
    let mut renderer =
        HeatmapRenderer::new(StubRowSource::new(vec![]), &HeatmapConfig::default());
    assert!(matches!(
        renderer.load_and_render().await,
        Err(HeatmapError::EmptyDataset)
    ));
}

#[tokio::test]
async fn ragged_rows_are_a_validation_error() {
    let rows = vec![row("a.jpg", vec![0.1, 0.2]), row("b.jpg", vec![0.3])];
    let mut renderer = HeatmapRenderer::new(StubRowSource::new(rows), &HeatmapConfig::default());
    match renderer.load_and_render().await {
        Err(HeatmapError::RaggedRow {
            row,
            expected,
            actual,
        }) => {
            assert_eq!(row, 1);
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected RaggedRow, got {other:?}"),
    }
}
