use assert_cmd::Command;
use predicates::prelude::*;

fn annuaire() -> Command {
    Command::cargo_bin("annuaire").unwrap()
}

#[test]
fn seeded_directory_is_listed_at_startup() {
    annuaire()
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Boulangerie Dupain"))
        .stdout(predicates::str::contains("Garage Morel"))
        .stdout(predicates::str::contains("Au revoir !"));
}

#[test]
fn search_filters_case_insensitively_on_company_name() {
    annuaire()
        .write_stdin("search DUPAIN\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Boulangerie Dupain"));
}

#[test]
fn search_in_activity_does_not_look_at_company_names() {
    annuaire()
        .write_stdin("search dupain --dans activite\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Aucun membre ne correspond à votre recherche.",
        ));
}

#[test]
fn empty_directory_has_its_own_message() {
    annuaire()
        .arg("--vide")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("L'annuaire est vide."));
}

#[test]
fn member_mutations_are_blocked_without_login() {
    annuaire()
        .write_stdin("rm 1\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Accès réservé à l'administrateur"))
        .stdout(predicates::str::contains("Boulangerie Dupain"));
}

#[test]
fn wrong_password_is_rejected_and_retryable() {
    annuaire()
        .write_stdin("login\nsecret\nlogin\nadmin\nlogout\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Mot de passe incorrect."))
        .stdout(predicates::str::contains("Mode administrateur activé."))
        .stdout(predicates::str::contains("Mode administrateur désactivé."));
}

#[test]
fn admin_can_remove_a_member_after_confirmation() {
    annuaire()
        .write_stdin("login\nadmin\nrm 1\no\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Membre supprimé : Boulangerie Dupain",
        ));
}

#[test]
fn declining_the_confirmation_keeps_the_member() {
    annuaire()
        .write_stdin("login\nadmin\nrm 1\nn\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Suppression annulée."))
        .stdout(predicates::str::contains("Boulangerie Dupain"));
}

#[test]
fn admin_can_add_a_member_through_the_form() {
    // One line per form field, then an empty line to keep the default logo.
    let script = "login\nadmin\nadd\nMenuiserie Bois d'Or\nMenuiserie\nLuc Charpentier\n06 00 00 00 00\nluc@boisdor.fr\nhttps://boisdor.fr\n\nquit\n";
    annuaire()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Membre ajouté : Menuiserie Bois d'Or",
        ))
        .stdout(predicates::str::contains("Luc Charpentier"));
}

#[test]
fn card_writes_a_vcf_file_next_to_the_session() {
    let dir = tempfile::tempdir().unwrap();
    annuaire()
        .current_dir(dir.path())
        .write_stdin("card 1\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Fiche contact enregistrée"));

    let card = std::fs::read_to_string(dir.path().join("Marie Dupain.vcf")).unwrap();
    assert!(card.starts_with("BEGIN:VCARD\nVERSION:3.0\nFN:Marie Dupain"));
    assert!(card.contains("ORG:Boulangerie Dupain"));
    assert!(card.ends_with("END:VCARD"));
}

#[test]
fn share_falls_back_to_printing_the_payload() {
    annuaire()
        .write_stdin("share 2\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "La fonction de partage n'est pas disponible ici.",
        ))
        .stdout(predicates::str::contains("Plomberie Rivière - Contact"))
        .stdout(predicates::str::contains(
            "Voici le contact de Jean Rivière de l'entreprise Plomberie Rivière:",
        ));
}

#[test]
fn photo_upload_lands_first_in_the_album() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("gala.png");
    std::fs::write(&image, [0x89, b'P', b'N', b'G']).unwrap();

    let script = format!(
        "photo {} --legende Soirée de gala\nalbum\nquit\n",
        image.display()
    );
    annuaire()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicates::str::contains("Photo ajoutée : Soirée de gala"))
        .stdout(predicates::str::contains("Soirée de gala"));
}

#[test]
fn photo_caption_defaults_to_the_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let image = dir.path().join("tournoi.jpg");
    std::fs::write(&image, [0xff, 0xd8]).unwrap();

    // Empty line accepts the suggested caption.
    let script = format!("photo {}\n\nalbum\nquit\n", image.display());
    annuaire()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicates::str::contains("Photo ajoutée : tournoi.jpg"));
}

#[test]
fn empty_album_invites_the_first_photo() {
    annuaire()
        .write_stdin("album\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "L'album est vide. Soyez le premier à ajouter une photo !",
        ));
}

#[test]
fn seed_file_replaces_the_built_in_list() {
    let dir = tempfile::tempdir().unwrap();
    let seed = dir.path().join("membres.json");
    std::fs::write(
        &seed,
        r#"[{
            "companyName": "Librairie du Port",
            "activity": "Librairie",
            "contactName": "Anne Legal",
            "phone": "02 98 00 00 00",
            "email": "anne@librairieduport.fr",
            "website": "https://librairieduport.fr"
        }]"#,
    )
    .unwrap();

    annuaire()
        .arg("--seed")
        .arg(&seed)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Librairie du Port"))
        .stdout(predicates::str::contains("Boulangerie Dupain").not());
}

#[test]
fn invalid_seed_file_aborts_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let seed = dir.path().join("membres.json");
    std::fs::write(
        &seed,
        r#"[{
            "companyName": "",
            "activity": "Librairie",
            "contactName": "Anne Legal",
            "phone": "02 98 00 00 00",
            "email": "anne@librairieduport.fr",
            "website": "https://librairieduport.fr"
        }]"#,
    )
    .unwrap();

    annuaire()
        .arg("--seed")
        .arg(&seed)
        .assert()
        .failure()
        .stderr(predicates::str::contains("companyName"));
}

#[test]
fn view_shows_the_full_member_card() {
    annuaire()
        .write_stdin("view 1\nquit\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Contact : Marie Dupain"))
        .stdout(predicates::str::contains("Téléphone : 06 12 34 56 78"))
        .stdout(predicates::str::contains(
            "Site : https://www.boulangerie-dupain.fr",
        ));
}
