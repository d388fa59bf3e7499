use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Process-level options, parsed once at startup.
#[derive(Parser, Debug)]
#[command(name = "annuaire")]
#[command(version)]
#[command(about = "Annuaire des membres du club et album photo, en mémoire", long_about = None)]
pub struct Cli {
    /// Fichier JSON d'amorçage du répertoire
    #[arg(long, value_name = "FICHIER")]
    pub seed: Option<PathBuf>,

    /// Démarrer avec un annuaire vide
    #[arg(long)]
    pub vide: bool,
}

/// One line of the interactive session.
#[derive(Parser, Debug)]
#[command(name = "annuaire", multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Lister les membres de l'annuaire
    #[command(alias = "ls")]
    List,

    /// Rechercher des membres par mots-clés
    #[command(alias = "s")]
    Search {
        /// Mots-clés (joints par des espaces)
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,

        /// Critère de recherche (entreprise, activite, gerant), répétable
        #[arg(short = 'd', long = "dans", value_name = "CRITÈRE")]
        dans: Vec<String>,
    },

    /// Afficher la fiche complète d'un membre
    #[command(alias = "v")]
    View {
        /// Numéro du membre dans la liste affichée
        numero: usize,
    },

    /// Ajouter un membre (administrateur)
    #[command(alias = "a")]
    Add,

    /// Modifier un membre (administrateur)
    #[command(alias = "e")]
    Edit {
        /// Numéro du membre dans la liste affichée
        numero: usize,
    },

    /// Supprimer un membre (administrateur)
    #[command(name = "rm", alias = "delete")]
    Remove {
        /// Numéro du membre dans la liste affichée
        numero: usize,
    },

    /// Enregistrer la fiche contact (.vcf) d'un membre
    Card {
        /// Numéro du membre dans la liste affichée
        numero: usize,
    },

    /// Partager les coordonnées d'un membre
    Share {
        /// Numéro du membre dans la liste affichée
        numero: usize,
    },

    /// Afficher l'album photo des événements
    Album,

    /// Ajouter une photo à l'album
    Photo {
        /// Fichier image à téléverser
        fichier: PathBuf,

        /// Légende (par défaut : le nom du fichier)
        #[arg(short, long, num_args = 1..)]
        legende: Vec<String>,
    },

    /// S'identifier comme administrateur
    Login,

    /// Quitter le mode administrateur
    Logout,

    /// Quitter la session
    #[command(alias = "exit")]
    Quit,
}
