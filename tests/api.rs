use vd2svg::Drawable;

const MIXED: &str = "<vector xmlns:android='http://schemas.android.com/apk/res/android'
    android:viewportWidth='48'
    android:viewportHeight='24'>
    <path android:pathData='P1' android:fillColor='#FF0000'/>
    <group>
        <path android:pathData='G1'/>
        <path android:pathData='G2' android:strokeColor='@color/outline' android:strokeWidth='2'/>
    </group>
    <path android:pathData='P2'/>
</vector>";

#[test]
fn viewport_dimensions() {
    let drawable = Drawable::from_str(MIXED).unwrap();
    assert_eq!(drawable.width, 48);
    assert_eq!(drawable.height, 24);
}

#[test]
fn document_order_is_preserved() {
    let drawable = Drawable::from_str(MIXED).unwrap();

    let paths: Vec<_> = drawable.paths.iter().map(|p| p.data.as_str()).collect();
    assert_eq!(paths, ["P1", "P2"]);

    assert_eq!(drawable.groups.len(), 1);
    let group_paths: Vec<_> = drawable.groups[0]
        .paths
        .iter()
        .map(|p| p.data.as_str())
        .collect();
    assert_eq!(group_paths, ["G1", "G2"]);
}

#[test]
fn color_filtering() {
    let drawable = Drawable::from_str(MIXED).unwrap();

    assert_eq!(drawable.paths[0].fill.as_deref(), Some("#FF0000"));
    assert_eq!(drawable.paths[0].stroke, None);

    // The symbolic stroke color is dropped, the width is not.
    let path = &drawable.groups[0].paths[1];
    assert_eq!(path.stroke, None);
    assert_eq!(path.stroke_width.as_deref(), Some("2"));
}

#[test]
fn from_data_utf8() {
    let drawable = Drawable::from_data(MIXED.as_bytes()).unwrap();
    assert_eq!(drawable.paths.len(), 2);
}
