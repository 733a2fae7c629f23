fn main() {
    skyview_site::start();
}
